use std::fs;

use hanrom_core::settings::{self, Settings};

use super::die;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!("{}", summary(&s));
}

/// Load a settings file for a single command run.
pub fn load_settings(file: &str) -> Settings {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::parse_settings_toml(&content), "Error in {file}: {}")
}

fn summary(s: &Settings) -> String {
    format!(
        "OK: output.boundary={:?}, output.apostrophe={:?}",
        s.output.boundary, s.output.apostrophe
    )
}
