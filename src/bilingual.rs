//! Tamil/English field pairs as stored by member, state, city and area
//! records.
//!
//! Every record keeps a name in both scripts. When one side is typed, the
//! other is derived: Tamil input is romanized locally, English input goes
//! through the remote input tool.

use serde::{Deserialize, Serialize};
use tamil_core::reverse::{transliterate_latin_to_ta, InputTool};
use tamil_core::translit::transliterate_ta_to_latin;
use tamil_core::unicode::contains_tamil;

const TAMIL_SUFFIX: &str = "Tam";
const ENGLISH_SUFFIX: &str = "Eng";

/// Record fields stored in both scripts. `PollingBoth` is spelled as in the
/// stored schema.
const TRANSLATABLE_FIELDS: [&str; 16] = [
    "NameEng",
    "NameTam",
    "FatherNameEng",
    "FatherNameTam",
    "AddressEng",
    "AddressTam",
    "PollingBothEng",
    "PollingBothTam",
    "LegislativeAssemblyEng",
    "LegislativeAssemblyTam",
    "StateEng",
    "StateTam",
    "CityEng",
    "CityTam",
    "AreaEng",
    "AreaTam",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "en")]
    English,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub ta: String,
    pub en: String,
}

impl BilingualText {
    /// Fill both slots from a value typed in `lang`.
    pub fn from_input<T: InputTool + ?Sized>(lang: Language, value: &str, tool: &T) -> Self {
        match lang {
            Language::Tamil => Self {
                ta: value.to_string(),
                en: transliterate_ta_to_latin(value),
            },
            Language::English => Self {
                ta: transliterate_latin_to_ta(tool, value),
                en: value.to_string(),
            },
        }
    }

    /// Normalize a stored pair whose slots may have been swapped.
    ///
    /// The pair is swapped only when the Tamil slot has no Tamil script and
    /// the English slot does.
    pub fn from_raw(raw_ta: &str, raw_en: &str) -> Self {
        if !contains_tamil(raw_ta) && contains_tamil(raw_en) {
            Self {
                ta: raw_en.to_string(),
                en: raw_ta.to_string(),
            }
        } else {
            Self {
                ta: raw_ta.to_string(),
                en: raw_en.to_string(),
            }
        }
    }
}

/// Name of the paired field (`NameEng` <-> `NameTam`).
///
/// Only fields kept in both scripts have a counterpart; any other name,
/// even one ending in `Eng` or `Tam`, yields `None`.
pub fn counterpart_field(name: &str) -> Option<String> {
    if !TRANSLATABLE_FIELDS.contains(&name) {
        return None;
    }
    if let Some(stem) = name.strip_suffix(ENGLISH_SUFFIX) {
        (!stem.is_empty()).then(|| format!("{stem}{TAMIL_SUFFIX}"))
    } else if let Some(stem) = name.strip_suffix(TAMIL_SUFFIX) {
        (!stem.is_empty()).then(|| format!("{stem}{ENGLISH_SUFFIX}"))
    } else {
        None
    }
}

/// Derive the counterpart `(field, value)` for an edited paired field.
///
/// Returns `None` for blank values and for fields without a counterpart.
pub fn derive_counterpart<T: InputTool + ?Sized>(
    field: &str,
    value: &str,
    tool: &T,
) -> Option<(String, String)> {
    if value.trim().is_empty() {
        return None;
    }
    let counterpart = counterpart_field(field)?;
    let derived = if field.ends_with(TAMIL_SUFFIX) {
        transliterate_ta_to_latin(value)
    } else {
        transliterate_latin_to_ta(tool, value)
    };
    Some((counterpart, derived))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use tamil_core::reverse::ReverseError;

    use super::*;

    struct Counting(Cell<u32>);

    impl InputTool for Counting {
        fn suggest(&self, _text: &str) -> Result<String, ReverseError> {
            self.0.set(self.0.get() + 1);
            Ok("மதுரை".to_string())
        }
    }

    struct Offline;

    impl InputTool for Offline {
        fn suggest(&self, _text: &str) -> Result<String, ReverseError> {
            Err(ReverseError::Http("offline".into()))
        }
    }

    #[test]
    fn test_from_tamil_input_is_local() {
        let tool = Counting(Cell::new(0));
        let pair = BilingualText::from_input(Language::Tamil, "அம்மா", &tool);
        assert_eq!(pair.ta, "அம்மா");
        assert_eq!(pair.en, "ammaa");
        assert_eq!(tool.0.get(), 0);
    }

    #[test]
    fn test_from_english_input_uses_tool() {
        let tool = Counting(Cell::new(0));
        let pair = BilingualText::from_input(Language::English, "Madurai", &tool);
        assert_eq!(pair.ta, "மதுரை");
        assert_eq!(pair.en, "Madurai");
        assert_eq!(tool.0.get(), 1);
    }

    #[test]
    fn test_from_english_input_offline_keeps_text() {
        let pair = BilingualText::from_input(Language::English, "Salem", &Offline);
        assert_eq!(pair.ta, "Salem");
        assert_eq!(pair.en, "Salem");
    }

    #[test]
    fn test_from_raw_swaps_misplaced_pair() {
        let pair = BilingualText::from_raw("Tamil Nadu", "தமிழ்நாடு");
        assert_eq!(pair.ta, "தமிழ்நாடு");
        assert_eq!(pair.en, "Tamil Nadu");
    }

    #[test]
    fn test_from_raw_keeps_other_pairs() {
        let ok = BilingualText::from_raw("தமிழ்நாடு", "Tamil Nadu");
        assert_eq!(ok.ta, "தமிழ்நாடு");
        // Both Tamil, or neither: left alone.
        let both = BilingualText::from_raw("சேலம்", "சேலம்");
        assert_eq!(both.en, "சேலம்");
        let neither = BilingualText::from_raw("Kerala", "Kerala");
        assert_eq!(neither, BilingualText { ta: "Kerala".into(), en: "Kerala".into() });
    }

    #[test]
    fn test_counterpart_field() {
        assert_eq!(counterpart_field("NameEng").as_deref(), Some("NameTam"));
        assert_eq!(counterpart_field("FatherNameTam").as_deref(), Some("FatherNameEng"));
        // Misspelling matches the stored schema.
        assert_eq!(counterpart_field("PollingBothEng").as_deref(), Some("PollingBothTam"));
        assert_eq!(counterpart_field("Eng"), None);
        assert_eq!(counterpart_field("MobileNo"), None);
    }

    #[test]
    fn test_counterpart_field_is_limited_to_bilingual_fields() {
        for name in ["idCardEng", "RelationshipEng", "RelationshipTam", "StreetEng", "StreetTam"] {
            assert_eq!(counterpart_field(name), None, "{name}");
        }
        for name in TRANSLATABLE_FIELDS {
            let other = counterpart_field(name).unwrap();
            assert!(TRANSLATABLE_FIELDS.contains(&other.as_str()), "{name}");
        }
    }

    #[test]
    fn test_derive_counterpart() {
        let tool = Counting(Cell::new(0));
        assert_eq!(
            derive_counterpart("AddressTam", "மதுரை", &tool),
            Some(("AddressEng".to_string(), "mthurai".to_string()))
        );
        assert_eq!(
            derive_counterpart("CityEng", "Madurai", &tool),
            Some(("CityTam".to_string(), "மதுரை".to_string()))
        );
        assert_eq!(tool.0.get(), 1);
    }

    #[test]
    fn test_derive_counterpart_skips_blank_and_unpaired() {
        let tool = Counting(Cell::new(0));
        assert_eq!(derive_counterpart("NameTam", "  ", &tool), None);
        assert_eq!(derive_counterpart("EmailId", "a@b.c", &tool), None);
        assert_eq!(derive_counterpart("idCardEng", "X123", &tool), None);
        assert_eq!(derive_counterpart("StreetTam", "தெரு", &tool), None);
        assert_eq!(tool.0.get(), 0);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&BilingualText {
            ta: "அ".into(),
            en: "a".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"ta":"அ","en":"a"}"#);
        let lang: Language = serde_json::from_str("\"ta\"").unwrap();
        assert_eq!(lang, Language::Tamil);
    }
}
