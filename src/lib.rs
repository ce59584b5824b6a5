//! Hangul romanization engine.
//!
//! Re-exports the pure core (`hanrom_core`) and exposes it to host languages
//! through UniFFI.

uniffi::setup_scaffolding!();

pub mod api;
pub mod trace_init;

pub use hanrom_core::{romanize, settings, unicode};
