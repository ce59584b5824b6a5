//! UniFFI export layer — type-safe host-language bindings for the engine.
//!
//! Each public type here maps to a generated record, enum or error.

mod types;

pub use types::{HanCharClass, HanError, HanExplanation, HanSyllable};

use hanrom_core::romanize::{self, Transcriber};
use hanrom_core::settings;
use tracing::debug;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Romanize `text`, inserting `boundary` (default: none) between characters.
#[uniffi::export(default(boundary = None))]
pub fn transcribe(text: String, boundary: Option<String>) -> String {
    romanize::transcribe(&text, boundary.as_deref().unwrap_or(""))
}

/// Romanize `text` with the boundary and apostrophe style from the loaded
/// settings.
#[uniffi::export]
pub fn transcribe_with_settings(text: String) -> String {
    Transcriber::from_settings(settings::settings()).transcribe(&text)
}

#[uniffi::export]
pub fn explain(text: String) -> Vec<HanExplanation> {
    romanize::explain(&text)
        .into_iter()
        .map(HanExplanation::from)
        .collect()
}

#[uniffi::export]
pub fn settings_load_config(path: String) -> Result<(), HanError> {
    let content = std::fs::read_to_string(&path).map_err(|e| HanError::Io {
        msg: format!("{path}: {e}"),
    })?;
    settings::init_custom(content).map_err(|e| HanError::InvalidData { msg: e.to_string() })?;
    debug!(path = %path, "custom settings installed");
    Ok(())
}

#[uniffi::export]
pub fn settings_default_config() -> String {
    settings::default_toml().to_string()
}

#[uniffi::export]
pub fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(std::path::Path::new(&log_dir));
}
