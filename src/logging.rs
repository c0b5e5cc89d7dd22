//! Logging setup writing lifecycle events to the console and to a durable
//! append-only log file.

use anyhow::Context;
use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE_NAME: &str = "restarts.log";

/// Install the global subscriber: a human-readable console layer plus a
/// plain-text file layer appending to `restarts.log` in `log_dir`.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let timer = ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string());

    let console_layer = fmt::layer()
        .with_target(false)
        .with_timer(timer.clone())
        .with_ansi(true);

    let file_appender = rolling::never(log_dir, LOG_FILE_NAME);
    let file_layer = fmt::layer()
        .with_target(false)
        .with_timer(timer)
        .with_ansi(false)
        .with_writer(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_the_log_file_in_the_requested_directory() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");

        init(&log_dir).unwrap();
        tracing::info!("logging smoke test");

        assert!(log_dir.join(LOG_FILE_NAME).exists());
    }
}
