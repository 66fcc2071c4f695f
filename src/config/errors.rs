//! Configuration error types
//!
//! Error codes:
//! - CRM_CONFIG_IO
//! - CRM_CONFIG_PARSE
//! - CRM_CONFIG_INVALID

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config is not valid JSON for [`FilterConfig`](super::FilterConfig)
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but holds unusable values
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ConfigError::Invalid(reason.into())
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CRM_CONFIG_IO",
            ConfigError::Parse(_) => "CRM_CONFIG_PARSE",
            ConfigError::Invalid(_) => "CRM_CONFIG_INVALID",
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
