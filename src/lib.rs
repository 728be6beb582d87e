//! LottoGo - Royal Thai Lottery ticket checker
//!
//! A terminal rendition of a mobile lottery companion: latest draws, draw
//! history, a ticket checker keypad, a lucky number generator and the user's
//! saved tickets, all driven by a single view-state value.

use thiserror::Error;

pub mod app;
pub mod config;
pub mod logging;
pub mod lotto;
pub mod models;
pub mod util;

/// Errors raised by the ambient parts of the application.
///
/// Ticket evaluation, keypad input and navigation are total and never fail;
/// only the terminal, configuration, feed and log plumbing can.
#[derive(Debug, Error)]
pub enum LottoError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Results feed could not be read or held no usable draw
    #[error("Results feed error: {0}")]
    Feed(String),
    /// Terminal setup or rendering error
    #[error("TUI error: {0}")]
    Tui(String),
    /// Log subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<serde_json::Error> for LottoError {
    fn from(err: serde_json::Error) -> Self {
        LottoError::Feed(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for LottoError {
    fn from(err: toml::de::Error) -> Self {
        LottoError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for LottoError {
    fn from(err: toml::ser::Error) -> Self {
        LottoError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for LottoGo operations
pub type Result<T> = std::result::Result<T, LottoError>;

/// Error reporting helpers
pub mod error {
    use super::LottoError;

    /// Convert error to a user-facing hint, printed once the terminal is restored
    pub fn user_friendly_message(error: &LottoError) -> String {
        match error {
            LottoError::Io(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check the permissions of the config and data directories."
                    .to_string()
            }
            LottoError::Config(msg) => {
                format!("Configuration error: {}. Check your lottogo.toml.", msg)
            }
            LottoError::Feed(msg) => {
                format!("Results feed unusable ({}). Built-in draws are shown instead.", msg)
            }
            LottoError::Tui(_) => {
                "Terminal could not be initialised. Run lottogo from an interactive terminal."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }

    /// Whether the app can keep running with built-in data after this error
    pub fn is_recoverable(error: &LottoError) -> bool {
        matches!(error, LottoError::Feed(_) | LottoError::Logging(_))
    }
}

// Common constants
pub const APP_NAME: &str = "lottogo";
pub const CONFIG_FILE: &str = "lottogo.toml";
pub const LOG_FILE: &str = "lottogo.log";
pub const MAX_RESULTS_HISTORY: usize = 100;
/// Digits on a Thai lottery ticket
pub const TICKET_LENGTH: usize = 6;
