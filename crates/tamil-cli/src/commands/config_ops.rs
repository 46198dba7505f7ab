use std::fs;

/// Install a custom settings file before anything reads the settings.
pub fn load_settings(file: Option<&str>) {
    let Some(file) = file else { return };
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(tamil_core::settings::init_custom(content), "Error: {}");
}

pub fn settings_export() {
    print!("{}", tamil_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        tamil_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: reverse.endpoint={}, reverse.itc={}, reverse.timeout_ms={}",
        s.reverse.endpoint, s.reverse.itc, s.reverse.timeout_ms
    );
}
