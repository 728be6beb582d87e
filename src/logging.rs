//! Log subscriber setup
//!
//! The terminal is owned by the TUI, so log lines go to a file in the data
//! directory instead of stdout/stderr.

use crate::config::AppConfig;
use crate::{LottoError, Result, APP_NAME, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Standard log file location: $DATA_HOME/lottogo/lottogo.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| LottoError::Logging("Unable to determine data directory".to_string()))?;

    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber. Returns the log file path when logging is on.
pub fn init(config: &AppConfig) -> Result<Option<PathBuf>> {
    if !config.log_to_file {
        return Ok(None);
    }

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LottoError::Logging(e.to_string()))?;

    Ok(Some(path))
}
