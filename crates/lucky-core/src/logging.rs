//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Name of the log file inside the log directory
pub const LOG_FILENAME: &str = "lucky.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/lucky-draw/logs/` so they never
/// interleave with the terminal UI. Log level is controlled by the
/// `LUCKY_LOG` environment variable.
///
/// # Examples
/// ```bash
/// LUCKY_LOG=debug cargo run
/// LUCKY_LOG=lucky_core=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILENAME);

    // Default to info for our crates, allow override via LUCKY_LOG
    let env_filter = EnvFilter::try_from_env("LUCKY_LOG").unwrap_or_else(|_| {
        EnvFilter::new("lucky_draw=info,lucky_core=info,lucky_app=info,lucky_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Lucky Draw starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Directory holding the daily log files (`lucky.log.YYYY-MM-DD`)
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("lucky-draw").join("logs")
}
