use crate::constants::{DEFAULT_LOG_DIRECTIVE, LOG_DIR_ENV};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging: human-readable lines on stderr, plus daily-rotated JSON
/// files when `FERRET_LOG_DIR` is set.
///
/// Stdout is left to output stages. Keep the returned guard alive until exit so
/// buffered file logs are flushed.
pub fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    let (file_layer, guard) = match std::env::var(LOG_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => {
            let _ = fs::create_dir_all(&dir);
            let file_appender = tracing_appender::rolling::daily(&dir, "ferret.log");
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            (Some(fmt::layer().json().with_writer(non_blocking_writer)), Some(guard))
        }
        _ => (None, None),
    };

    let console_layer = fmt::layer().with_writer(std::io::stderr);

    // A subscriber may already be installed (tests, embedding binaries)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    guard
}
