//! Latin-to-Tamil transliteration through a remote input tool.
//!
//! The network call itself lives behind [`InputTool`]; this module owns the
//! request/response format and the fail-open policy: any failure returns the
//! caller's text unchanged so typed input is never lost.

mod codec;

pub use codec::{parse_response, query_pairs};

use tracing::{debug, debug_span, warn};

#[derive(Debug, thiserror::Error)]
pub enum ReverseError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("response parse error: {0}")]
    Parse(String),
    #[error("response has no candidate")]
    NoCandidate,
}

/// A source of Tamil suggestions for Latin text.
pub trait InputTool {
    /// Return the first Tamil suggestion for `text`.
    fn suggest(&self, text: &str) -> Result<String, ReverseError>;
}

/// Transliterate Latin text to Tamil, falling back to `input` on any error.
///
/// Blank input is returned as-is without consulting the tool.
pub fn transliterate_latin_to_ta<T: InputTool + ?Sized>(tool: &T, input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_string();
    }
    let _span = debug_span!("transliterate_latin_to_ta", len = input.len()).entered();
    match tool.suggest(input) {
        Ok(candidate) if !candidate.is_empty() => {
            debug!(candidate = candidate.as_str(), "suggestion");
            candidate
        }
        Ok(_) => {
            warn!("empty suggestion, keeping input");
            input.to_string()
        }
        Err(e) => {
            warn!(error = %e, "reverse transliteration failed, keeping input");
            input.to_string()
        }
    }
}
