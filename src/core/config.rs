//! Run configuration loaded from TOML
//!
//! Every field has a default, so an empty file (or no file at all) gives
//! the same behavior as the bare CLI. Command-line flags override whatever
//! the file sets.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{NavError, Result};
use crate::core::types::{NavigationMode, OutputFormat};

/// Configuration for a navigation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Transition rules to apply
    pub mode: NavigationMode,

    /// Output format for the final report
    pub format: OutputFormat,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            mode: NavigationMode::Aimed,
            format: OutputFormat::Text,
            log_filter: "dive_nav=info".to_string(),
        }
    }
}

impl NavConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: NavConfig = toml::from_str(contents)
            .map_err(|e| NavError::Config(format!("Failed to parse config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            NavError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&contents)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(NavError::Config("log_filter must not be empty".into()));
        }
        Ok(())
    }
}
