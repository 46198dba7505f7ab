//! Character-level Unicode classification for Tamil text.

use crate::translit::table;
use crate::translit::VIRAMA;

pub fn is_tamil(c: char) -> bool {
    ('\u{0B80}'..='\u{0BFF}').contains(&c)
}

/// Check if a string carries any Tamil-block character.
///
/// Used to tell which side of a stored Tamil/English pair really holds
/// Tamil script.
pub fn contains_tamil(s: &str) -> bool {
    s.chars().any(is_tamil)
}

pub fn is_independent_vowel(c: char) -> bool {
    table::uyir_index(c).is_some()
}

pub fn is_consonant(c: char) -> bool {
    table::mei_index(c).is_some()
}

pub fn is_vowel_sign(c: char) -> bool {
    table::vowel_sign_index(c).is_some()
}

pub fn is_virama(c: char) -> bool {
    c == VIRAMA
}
