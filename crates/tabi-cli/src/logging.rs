use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["tabi", "tabi_cli", "tabi_core", "tabi_types"];

pub const LOG_FILE_NAME: &str = "tabi.log";

/// Where log lines go
pub enum LogSink<'a> {
    /// Console commands
    Stderr,
    /// The TUI owns the terminal, so logs go to `<dir>/tabi.log`
    File(&'a Path),
}

fn build_filter(level: LogLevel) -> EnvFilter {
    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={}", level.as_filter()))
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize tracing from `--log-level`.
///
/// `RUST_LOG` env var overrides the CLI flag if set. If the log file cannot
/// be opened, logging falls back to stderr.
pub fn init(level: LogLevel, sink: LogSink<'_>) {
    let filter = build_filter(level);

    if let LogSink::File(dir) = sink {
        let opened = std::fs::create_dir_all(dir).and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(LOG_FILE_NAME))
        });

        match opened {
            Ok(file) => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
                return;
            }
            Err(e) => eprintln!("Warning: could not open log file in {}: {}", dir.display(), e),
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
