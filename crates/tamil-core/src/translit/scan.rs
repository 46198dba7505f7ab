use serde::Serialize;

use super::table::{mei_index, uyir_index, uyirmei, vowel_sign_index, MEI, UYIR};
use super::VIRAMA;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Independent vowel (uyir).
    Vowel,
    /// Consonant with no following vowel sign.
    Consonant,
    /// Consonant and the dependent vowel sign right after it.
    ConsonantWithSign,
    /// Standalone pulli; produces no output.
    Virama,
    /// Anything else, copied through.
    Other,
}

/// One step of the left-to-right scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Char offset of the token in the input.
    pub offset: usize,
    /// Input text consumed by this step (one or two chars).
    pub source: &'a str,
    pub kind: TokenKind,
    pub latin: &'a str,
}

/// Grapheme scanner with one char of lookahead.
///
/// Yields one [`Token`] per step; the Latin outputs concatenated form the
/// romanization.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    offset: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            offset: 0,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let input: &'a str = self.input;
        let rest = &input[self.pos..];
        let mut chars = rest.chars();
        let ch = chars.next()?;
        let mut len = ch.len_utf8();
        let mut width = 1;

        let (kind, latin): (TokenKind, &'a str) = if let Some(v) = uyir_index(ch) {
            (TokenKind::Vowel, UYIR[v].1)
        } else if let Some(row) = mei_index(ch) {
            // Only a sign directly after the consonant combines with it.
            // A pulli is left for the next step, which drops it.
            match chars.next().and_then(|next| vowel_sign_index(next).map(|s| (next, s))) {
                Some((sign_ch, sign)) => {
                    len += sign_ch.len_utf8();
                    width = 2;
                    (TokenKind::ConsonantWithSign, uyirmei(row, sign))
                }
                None => (TokenKind::Consonant, MEI[row].1),
            }
        } else if ch == VIRAMA {
            (TokenKind::Virama, "")
        } else {
            (TokenKind::Other, &rest[..len])
        };

        let token = Token {
            offset: self.offset,
            source: &rest[..len],
            kind,
            latin,
        };
        self.pos += len;
        self.offset += width;
        Some(token)
    }
}
