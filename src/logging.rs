//! Tracing setup for the CLI and the TUI

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, UpwatchError};

/// Environment variable holding an explicit filter, e.g. `UPWATCH_LOG=upwatch=debug`
pub const LOG_ENV: &str = "UPWATCH_LOG";

/// Pick the log level: `-v` flags win over the configured default
pub fn level_for(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(format!("upwatch={level}")))
        .unwrap_or_else(|_| EnvFilter::new("upwatch=warn"))
}

/// Log to stderr, used by the plain CLI commands
pub fn init_stderr(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| UpwatchError::ConfigError(format!("Failed to initialise logging: {e}")))
}

/// Log to `upwatch.log` under `dir`. The TUI owns the terminal, so nothing may
/// be written to stdout/stderr while it runs. Hold the guard until exit so
/// buffered lines get flushed.
pub fn init_file(dir: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let file_appender = tracing_appender::rolling::never(dir, "upwatch.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .map_err(|e| UpwatchError::ConfigError(format!("Failed to initialise logging: {e}")))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, "warn"), "warn");
        assert_eq!(level_for(0, "error"), "error");
        assert_eq!(level_for(1, "warn"), "info");
        assert_eq!(level_for(2, "warn"), "debug");
        assert_eq!(level_for(7, "warn"), "trace");
    }
}
