use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use tamil_cli::commands::{config_ops, reverse_ops, translit_ops};
use tamil_engine::bilingual::Language;

#[derive(Parser)]
#[command(name = "tamiltool", about = "Tamil/Latin transliteration tool")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for the JSON trace log (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Lang {
    Ta,
    En,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::Ta => Language::Tamil,
            Lang::En => Language::English,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Romanize Tamil text (reads stdin lines when no text is given)
    Romanize {
        /// Text to romanize
        text: Vec<String>,
    },
    /// Show each scan step of the romanization
    Explain {
        /// Text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Transliterate Latin text to Tamil via the input-tool service
    Reverse {
        /// Latin text
        text: String,
        /// Fail on service errors instead of echoing the input
        #[arg(long)]
        strict: bool,
    },
    /// Build a Tamil/English pair from text typed in one language
    Pair {
        /// Language the text is written in
        #[arg(long, value_enum)]
        lang: Lang,
        /// Input text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        tamil_engine::init_tracing(dir);
    }
    config_ops::load_settings(cli.settings.as_deref());

    match cli.command {
        Command::Romanize { text } => translit_ops::romanize(&text),
        Command::Explain { text, json } => translit_ops::explain_cmd(&text, json),
        Command::Reverse { text, strict } => reverse_ops::reverse(&text, strict),
        Command::Pair { lang, text, json } => reverse_ops::pair(lang.into(), &text, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
