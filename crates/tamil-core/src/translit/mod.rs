//! Tamil-to-Latin transliteration engine.
//!
//! A single left-to-right scan over static grapheme tables: independent
//! vowels, consonants (bare or with a dependent vowel sign), and the pulli
//! (virama), which never reaches the output. Everything else is copied
//! through unchanged.

mod explain;
mod scan;
pub(crate) mod table;

pub use explain::{explain, format_text, ExplainResult, ExplainToken};
pub use scan::{Scanner, Token, TokenKind};

use tracing::trace_span;

/// Tamil pulli (virama), U+0BCD.
pub const VIRAMA: char = '\u{0BCD}';

/// Romanize Tamil text. Total over all inputs; non-Tamil text is copied
/// through as-is.
pub fn transliterate_ta_to_latin(input: &str) -> String {
    let _span = trace_span!("transliterate", len = input.len()).entered();
    let mut out = String::with_capacity(input.len());
    for token in Scanner::new(input) {
        out.push_str(token.latin);
    }
    if out.contains(VIRAMA) {
        out.retain(|c| c != VIRAMA);
    }
    out
}

/// Short alias for [`transliterate_ta_to_latin`].
pub fn transliterate(input: &str) -> String {
    transliterate_ta_to_latin(input)
}
