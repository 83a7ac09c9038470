//! Error types shared across the crate

use std::path::PathBuf;

/// Errors raised when validating a target word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word must be exactly 4 letters, got {0}")]
    InvalidLength(usize),

    #[error("word must contain only ASCII letters")]
    NonAscii,

    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Reasons a guess is rejected without touching the round.
///
/// The display text is the notification shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Please enter exactly 4 letters")]
    InvalidLength(usize),

    #[error("Word is not yet loaded. Please wait.")]
    TargetNotReady,
}

/// Errors that can occur while obtaining a target word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("word service returned an unusable response: {0}")]
    InvalidResponse(String),

    #[error("no four-letter word after {attempts} requests")]
    RetriesExhausted { attempts: u32 },
}

impl FetchError {
    /// Short notification text for the player
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::Network(_) => "Error fetching word",
            Self::InvalidResponse(_) | Self::RetriesExhausted { .. } => "Failed to load word",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Errors that can occur while reading or writing the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse store {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_error_display_is_player_notice() {
        assert_eq!(
            GuessError::InvalidLength(3).to_string(),
            "Please enter exactly 4 letters"
        );
        assert_eq!(
            GuessError::TargetNotReady.to_string(),
            "Word is not yet loaded. Please wait."
        );
    }

    #[test]
    fn fetch_error_notices() {
        assert_eq!(
            FetchError::Network("connection refused".into()).notice(),
            "Error fetching word"
        );
        assert_eq!(
            FetchError::InvalidResponse("HTTP 503".into()).notice(),
            "Failed to load word"
        );
        assert_eq!(
            FetchError::RetriesExhausted { attempts: 10 }.notice(),
            "Failed to load word"
        );
    }

    #[test]
    fn fetch_error_display() {
        let err = FetchError::RetriesExhausted { attempts: 3 };
        assert_eq!(err.to_string(), "no four-letter word after 3 requests");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("game.max_attempts must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.max_attempts must be > 0"
        );
    }

    #[test]
    fn word_error_display() {
        assert_eq!(
            WordError::InvalidLength(5).to_string(),
            "word must be exactly 4 letters, got 5"
        );
    }
}
