//! Application configuration
//!
//! Read from a TOML file with `[api]`, `[retry]`, `[game]` and `[store]`
//! sections. Missing keys fall back to their defaults; command-line flags
//! are applied on top by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::EvaluationMode;
use crate::error::ConfigError;
use crate::game::DEFAULT_MAX_ATTEMPTS;
use crate::source::{DEFAULT_BASE_URL, RetryPolicy};
use crate::state::STORE_NAMESPACE;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "word_scramble.toml";

/// Upper bound accepted for `game.max_attempts`
pub const MAX_ATTEMPTS_LIMIT: u32 = 100;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub retry: RetryPolicy,
    pub game: GameConfig,
    pub store: StoreConfig,
}

/// Word service settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Draw words from a local list instead of the network
    pub offline: bool,
    /// Word list for offline play; the embedded list when unset
    pub word_list: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            offline: false,
            word_list: None,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Round settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_attempts: u32,
    pub evaluation: EvaluationMode,
    /// How long notifications stay on screen
    pub notice_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            evaluation: EvaluationMode::Containment,
            notice_secs: 3,
        }
    }
}

/// Persistence settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub namespace: String,
    /// Keep attempts in memory only
    pub persist: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".word_scramble"),
            namespace: STORE_NAMESPACE.to_string(),
            persist: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be loaded.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "game.max_attempts must be > 0".into(),
            ));
        }
        if self.game.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::Validation(format!(
                "game.max_attempts must be <= {MAX_ATTEMPTS_LIMIT}"
            )));
        }
        if self.game.notice_secs == 0 {
            return Err(ConfigError::Validation(
                "game.notice_secs must be > 0".into(),
            ));
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "retry.max_attempts must be > 0".into(),
            ));
        }
        if self.retry.multiplier == 0 {
            return Err(ConfigError::Validation(
                "retry.multiplier must be > 0".into(),
            ));
        }
        if self.retry.initial_backoff_ms > self.retry.max_backoff_ms {
            return Err(ConfigError::Validation(
                "retry.initial_backoff_ms must be <= retry.max_backoff_ms".into(),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api.timeout_secs must be > 0".into(),
            ));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.base_url must not be empty".into(),
            ));
        }
        if self.store.namespace.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store.namespace must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game.max_attempts, 5);
        assert_eq!(config.store.namespace, "gameState");
        assert_eq!(config.api.base_url, "https://random-word-api.herokuapp.com");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [game]
            max_attempts = 6
            evaluation = "counted"

            [retry]
            max_attempts = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.game.max_attempts, 6);
        assert_eq!(config.game.evaluation, EvaluationMode::Counted);
        assert_eq!(config.game.notice_secs, 3);
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.initial_backoff_ms, 100);
        assert!(!config.api.offline);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_evaluation_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\nevaluation = \"fuzzy\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_zero_attempts() {
        let mut config = AppConfig::default();
        config.game.max_attempts = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: game.max_attempts must be > 0"
        );
    }

    #[test]
    fn test_validation_caps_attempts() {
        let mut config = AppConfig::default();
        config.game.max_attempts = MAX_ATTEMPTS_LIMIT;
        assert!(config.validate().is_ok());

        config.game.max_attempts = 4_000_000_000;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: game.max_attempts must be <= 100"
        );
    }

    #[test]
    fn test_validation_rejects_zero_notice_time() {
        let mut config = AppConfig::default();
        config.game.notice_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validation_rejects_inverted_backoff() {
        let mut config = AppConfig::default();
        config.retry.initial_backoff_ms = 5_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.game.max_attempts, 5);
    }

    #[test]
    fn test_load_validates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("word_scramble.toml");
        std::fs::write(&path, "[game]\nmax_attempts = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("word_scramble.toml");
        std::fs::write(&path, "[game\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }
}
