use tamil_core::reverse::{transliterate_latin_to_ta, InputTool};
use tamil_engine::bilingual::{BilingualText, Language};
use tamil_engine::HttpInputTool;

/// Print the Tamil suggestion for `text`.
///
/// With `strict`, a failed request is reported instead of echoing the input.
pub fn reverse(text: &str, strict: bool) {
    let tool = HttpInputTool::from_global();
    if strict {
        let out = die!(tool.suggest(text), "Error querying {}: {}", tool.endpoint());
        println!("{out}");
    } else {
        println!("{}", transliterate_latin_to_ta(&tool, text));
    }
}

pub fn pair(lang: Language, text: &str, json: bool) {
    let tool = HttpInputTool::from_global();
    let pair = BilingualText::from_input(lang, text, &tool);
    if json {
        let out = die!(
            serde_json::to_string(&pair),
            "Error serializing result: {}"
        );
        println!("{out}");
    } else {
        println!("ta: {}", pair.ta);
        println!("en: {}", pair.en);
    }
}
