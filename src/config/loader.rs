// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, LintError, Result};
use std::path::Path;

use super::rule::RuleConfig;
use super::schema::ConfigFile;

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<RuleConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<RuleConfig> {
    let file: ConfigFile = toml::from_str(content).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    let config = RuleConfig::try_from(file)?;
    tracing::debug!("Loaded {} rules", config.len());
    Ok(config)
}
