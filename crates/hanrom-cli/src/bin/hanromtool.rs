use clap::{Parser, Subcommand};

use hanrom_cli::commands::{config_ops, transcribe_ops};
use hanrom_core::romanize::{Apostrophe, Transcriber};

#[derive(Parser)]
#[command(name = "hanromtool", about = "Hangul to McCune–Reischauer romanization")]
struct Cli {
    /// Write a JSON trace log into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize text (reads stdin line by line when TEXT is omitted)
    Transcribe {
        /// Text to romanize
        text: Option<String>,
        /// String inserted between the transcriptions of consecutive characters
        #[arg(short, long)]
        boundary: Option<String>,
        /// Use ' instead of ’ as the aspiration mark
        #[arg(long)]
        ascii_apostrophe: bool,
        /// Settings TOML file supplying defaults for the options above
        #[arg(long)]
        settings: Option<String>,
    },
    /// Show how each character is classified and transcribed
    Explain {
        /// Text to explain
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
        hanrom_engine::trace_init::init_tracing(std::path::Path::new(dir));
    }

    match cli.command {
        Command::Transcribe {
            text,
            boundary,
            ascii_apostrophe,
            settings,
        } => {
            let mut transcriber = match settings {
                Some(file) => Transcriber::from_settings(&config_ops::load_settings(&file)),
                None => Transcriber::default(),
            };
            if let Some(boundary) = boundary {
                transcriber = transcriber.with_boundary(boundary);
            }
            if ascii_apostrophe {
                transcriber = transcriber.with_apostrophe(Apostrophe::Ascii);
            }
            transcribe_ops::transcribe_cmd(text.as_deref(), &transcriber);
        }
        Command::Explain { text, json } => transcribe_ops::explain_cmd(&text, json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
