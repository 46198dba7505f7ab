use serde::Serialize;

use super::scan::{Scanner, TokenKind};
use super::transliterate_ta_to_latin;

#[derive(Debug, Serialize)]
pub struct ExplainToken {
    pub offset: usize,
    pub source: String,
    pub kind: TokenKind,
    pub latin: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub output: String,
    pub tokens: Vec<ExplainToken>,
}

/// Run the scan and record every step alongside the final romanization.
pub fn explain(input: &str) -> ExplainResult {
    let tokens = Scanner::new(input)
        .map(|t| ExplainToken {
            offset: t.offset,
            source: t.source.to_string(),
            kind: t.kind,
            latin: t.latin.to_string(),
        })
        .collect();

    ExplainResult {
        input: input.to_string(),
        output: transliterate_ta_to_latin(input),
        tokens,
    }
}

fn kind_label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Vowel => "vowel",
        TokenKind::Consonant => "consonant",
        TokenKind::ConsonantWithSign => "consonant+sign",
        TokenKind::Virama => "pulli",
        TokenKind::Other => "other",
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;
    let mut out = String::new();

    out.push_str(&format!(
        "=== \"{}\" ({} steps) ===\n",
        result.input,
        result.tokens.len(),
    ));

    for tok in &result.tokens {
        let pad_width = 8;
        let display_width = UnicodeWidthStr::width(tok.source.as_str());
        let padded = if display_width < pad_width {
            format!("{}{}", tok.source, " ".repeat(pad_width - display_width))
        } else {
            tok.source.clone()
        };
        let latin = if tok.kind == TokenKind::Virama {
            "(dropped)"
        } else {
            tok.latin.as_str()
        };
        out.push_str(&format!(
            "  [{:>3}] {} {:<15} -> {}\n",
            tok.offset,
            padded,
            kind_label(tok.kind),
            latin,
        ));
    }

    out.push_str(&format!("\n  result: {}\n", result.output));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_tamil_word() {
        let result = explain("தமிழ்");
        assert_eq!(result.output, "thmizh");
        let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Consonant,
                TokenKind::ConsonantWithSign,
                TokenKind::Consonant,
                TokenKind::Virama,
            ]
        );
        assert_eq!(result.tokens[1].source, "மி");
        assert_eq!(result.tokens[1].latin, "mi");
    }

    #[test]
    fn test_tokens_concatenate_to_output() {
        let result = explain("அம்மா 2024!");
        let joined: String = result.tokens.iter().map(|t| t.latin.as_str()).collect();
        assert_eq!(joined, result.output);
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&explain("க்"));
        assert!(text.starts_with("=== \"க்\" (2 steps) ===\n"));
        assert!(text.contains("consonant"));
        assert!(text.contains("(dropped)"));
        assert!(text.ends_with("result: k\n"));
    }

    #[test]
    fn test_explain_json_shape() {
        let json = serde_json::to_value(explain("கா")).unwrap();
        assert_eq!(json["output"], "kaa");
        assert_eq!(json["tokens"][0]["kind"], "consonant_with_sign");
        assert_eq!(json["tokens"][0]["offset"], 0);
    }
}
