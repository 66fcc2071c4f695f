//! Filtering configuration
//!
//! Loaded from a JSON file; every key is optional.
//!
//! ```json
//! {
//!   "max_condition_depth": 64,
//!   "trace_materialization": false,
//!   "log_level": "INFO"
//! }
//! ```

mod errors;

pub use errors::{ConfigError, ConfigResult};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::{log_event, Event, Logger, Severity};

/// Settings applied when materializing cached results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Deepest condition tree accepted (default: 64)
    #[serde(default = "default_max_condition_depth")]
    pub max_condition_depth: usize,

    /// Log every materialization at INFO instead of TRACE (default: false)
    #[serde(default)]
    pub trace_materialization: bool,

    /// Minimum log severity (default: "INFO")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_condition_depth() -> usize {
    64
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_condition_depth: default_max_condition_depth(),
            trace_materialization: false,
            log_level: default_log_level(),
        }
    }
}

impl FilterConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json_str(&content)?;

        let path_display = path.display().to_string();
        log_event(
            Severity::Info,
            Event::ConfigLoaded,
            &[("path", path_display.as_str())],
        );

        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: FilterConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_condition_depth == 0 {
            return Err(ConfigError::invalid("max_condition_depth must be > 0"));
        }
        self.severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> ConfigResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            ConfigError::invalid(format!("unknown log_level: '{}'", self.log_level))
        })
    }

    /// Severity used for the materialization event
    pub fn materialization_severity(&self) -> Severity {
        if self.trace_materialization {
            Severity::Info
        } else {
            Severity::Trace
        }
    }

    /// Installs `log_level` as the process-wide logging threshold
    pub fn apply_logging(&self) -> ConfigResult<()> {
        Logger::set_min_severity(self.severity()?);
        Ok(())
    }
}
