//! Configuration management module
//!
//! Handles loading, saving, and validation of the application settings and
//! locating the optional results feed.

use crate::app::state::ViewState;
use crate::{LottoError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

pub mod feed;

pub use feed::ResultsFeed;

const MIN_TICK_RATE_MS: u64 = 16;
const MAX_TICK_RATE_MS: u64 = 5_000;

/// Application settings stored in `lottogo.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input poll timeout between redraws, in milliseconds
    pub tick_rate_ms: u64,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Write logs to the data directory; stdout belongs to the TUI
    pub log_to_file: bool,
    /// Results feed replacing the built-in draws
    pub results_file: Option<PathBuf>,
    /// Screen shown at launch
    pub start_view: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            log_level: "info".to_string(),
            log_to_file: true,
            results_file: None,
            start_view: ViewState::Home.name().to_string(),
        }
    }
}

impl AppConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.tick_rate_ms) {
            return Err(LottoError::Config(format!(
                "Tick rate must be between {} and {} ms, got {}",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, self.tick_rate_ms
            )));
        }

        if self.log_level.trim().is_empty() {
            return Err(LottoError::Config("Log level must not be empty".to_string()));
        }

        Ok(())
    }

    /// Poll timeout for the event loop
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Launch screen; unknown names fall back to home
    pub fn start_view(&self) -> ViewState {
        let view = ViewState::from_name(&self.start_view);
        if view.name() != self.start_view.trim() {
            warn!(value = %self.start_view, "unknown start_view, falling back to home");
        }
        view
    }

    pub fn with_tick_rate_ms(mut self, tick_rate_ms: u64) -> Self {
        self.tick_rate_ms = tick_rate_ms;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_log_to_file(mut self, enabled: bool) -> Self {
        self.log_to_file = enabled;
        self
    }

    pub fn with_results_file(mut self, path: PathBuf) -> Self {
        self.results_file = Some(path);
        self
    }

    pub fn with_start_view(mut self, view: ViewState) -> Self {
        self.start_view = view.name().to_string();
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            LottoError::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            LottoError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LottoError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            LottoError::Config(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/lottogo/lottogo.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            LottoError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Read the configured results feed, if any
    pub fn load_feed(&self) -> Result<Option<ResultsFeed>> {
        match &self.results_file {
            Some(path) => ResultsFeed::load(path).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.start_view(), ViewState::Home);
    }

    #[test]
    fn test_toml_serialization() {
        let config = AppConfig::new()
            .with_tick_rate_ms(100)
            .with_log_level("debug")
            .with_start_view(ViewState::History);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: AppConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("tick_rate_ms = 500").unwrap();
        assert_eq!(config.tick_rate_ms, 500);
        assert_eq!(config.log_level, "info");
        assert!(config.log_to_file);
    }

    #[test]
    fn test_tick_rate_validation() {
        assert!(AppConfig::new().with_tick_rate_ms(0).validate().is_err());
        assert!(AppConfig::new().with_tick_rate_ms(10_000).validate().is_err());
        assert!(AppConfig::new().with_tick_rate_ms(16).validate().is_ok());
    }

    #[test]
    fn test_missing_results_file_is_not_a_config_error() {
        let config = AppConfig::new().with_results_file(PathBuf::from("/nonexistent/feed.json"));
        assert!(config.validate().is_ok());
        assert!(matches!(config.load_feed(), Err(LottoError::Feed(_))));
    }

    #[test]
    fn test_unknown_start_view_falls_back_to_home() {
        let config = AppConfig {
            start_view: "settings".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.start_view(), ViewState::Home);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        let config = AppConfig::new().with_log_to_file(false).with_tick_rate_ms(100);
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = AppConfig::load_from(&temp_dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(LottoError::Config(_))));
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("lottogo.toml"));
    }
}
