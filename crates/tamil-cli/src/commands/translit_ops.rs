use std::io::{self, BufRead, Write};

use tamil_core::translit::{explain, format_text, transliterate};

/// Romanize each argument, or each stdin line when there are none.
pub fn romanize(texts: &[String]) {
    if texts.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        die!(
            romanize_lines(stdin.lock(), stdout.lock()),
            "Error reading stdin: {}"
        );
        return;
    }
    for text in texts {
        println!("{}", transliterate(text));
    }
}

/// Romanize line by line; returns the number of lines written.
pub fn romanize_lines<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        writeln!(writer, "{}", transliterate(&line?))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

pub fn explain_cmd(text: &str, json: bool) {
    let result = explain(text);
    if json {
        let out = die!(
            serde_json::to_string_pretty(&result),
            "Error serializing result: {}"
        );
        println!("{out}");
    } else {
        print!("{}", format_text(&result));
    }
}
