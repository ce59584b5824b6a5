//! Opt-in JSON trace log for host processes.
//!
//! The host (an app linking the UniFFI bindings, or `hanromtool --trace-dir`)
//! calls `trace_init(log_dir)` once at startup, before the first
//! `transcribe`. Spans from `hanrom_core` and `hanrom_engine` then land in
//! `<log_dir>/hanrom-trace.jsonl`, one JSON object per line. `RUST_LOG`
//! overrides the default filter.
//!
//! Builds without the `trace` feature keep the same entry point as a no-op,
//! so hosts never need to gate the call themselves.

use std::path::{Path, PathBuf};

/// File name of the trace log inside the host's log directory.
pub const TRACE_FILE: &str = "hanrom-trace.jsonl";

#[cfg(feature = "trace")]
static INIT: std::sync::Once = std::sync::Once::new();

/// Where `init_tracing(log_dir)` writes.
pub fn trace_file(log_dir: &Path) -> PathBuf {
    log_dir.join(TRACE_FILE)
}

/// Install the global JSON subscriber. Only the first call has an effect;
/// later calls, even with another directory, are ignored.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // writer lives as long as the host process

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("hanrom_engine=debug,hanrom_core=debug")
                }),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_file_in_log_dir() {
        let dir = Path::new("/tmp/hanrom-logs");
        assert_eq!(trace_file(dir), dir.join("hanrom-trace.jsonl"));
    }

    #[test]
    fn test_init_tracing_repeat_calls() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        init_tracing(first.path());
        init_tracing(second.path());
        // The subscriber, if any, is bound to the first directory.
        assert!(!trace_file(second.path()).exists());
        assert_eq!(hanrom_core::romanize::transcribe("한", ""), "han");
    }
}
