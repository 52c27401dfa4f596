//! Structured error types for trivia-core.
//!
//! Library consumers get `TriviaError`; the `trivia` binary wraps these in
//! `anyhow` at the edge.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for trivia-core operations
#[derive(Error, Debug)]
pub enum TriviaError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file exists but could not be parsed
    #[error("Invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config could not be rendered back to TOML
    #[error("Failed to serialize config: {source}")]
    ConfigSerialize {
        #[from]
        source: toml::ser::Error,
    },

    /// A config value or override is unusable
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// A value that should hold an integer id does not
    #[error("Invalid id '{value}'")]
    InvalidId { value: String },
}

/// Result type alias for trivia-core operations
pub type Result<T> = std::result::Result<T, TriviaError>;

impl TriviaError {
    /// Create a config parse error for the given path
    pub fn config_parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an invalid id error
    pub fn invalid_id(value: impl Into<String>) -> Self {
        Self::InvalidId {
            value: value.into(),
        }
    }
}
