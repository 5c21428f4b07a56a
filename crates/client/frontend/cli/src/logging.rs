//! File logging for the terminal client.
//!
//! Stdout belongs to the game, so tracing output only goes to
//! `<cache dir>/logs/<session>/client.log`.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/deepspace/logs`
/// - Linux: `~/.cache/deepspace/logs` (or `$XDG_CACHE_HOME/deepspace/logs`)
/// - Windows: `%LOCALAPPDATA%\deepspace\cache\logs`
/// - Fallback: `<temp dir>/deepspace/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "deepspace")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("deepspace"));

    base_dir.join("logs")
}

/// Installs the global subscriber and returns the session log directory.
pub fn setup_logging(session_id: &str) -> Result<PathBuf> {
    let session_log_dir = log_dir().join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // Keep the writer alive for the rest of the process.
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(session_log_dir)
}
