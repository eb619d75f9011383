// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for conlint.
//!
//! Configuration problems are reported when a [`RuleConfig`] is built, before
//! any message is looked at. Header problems are structural and end up as a
//! single `header-format` violation rather than an `Err` from validation.
//!
//! [`RuleConfig`]: crate::config::RuleConfig

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for conlint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Message failed the configured rules
    #[error("Validation failed: {errors} errors, {warnings} warnings")]
    ValidationFailed { errors: usize, warnings: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown severity{}: '{value}' (expected disabled, warning, error or 0-2)", for_rule(.rule))]
    UnknownSeverity { rule: Option<String>, value: String },

    #[error("Unknown condition for '{rule}': '{value}' (expected always or never)")]
    UnknownCondition { rule: String, value: String },

    #[error("Unknown casing style: '{style}'")]
    UnknownCaseStyle { style: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

impl ConfigError {
    /// Name the rule an unknown severity was read for.
    pub fn in_rule(self, name: impl Into<String>) -> Self {
        match self {
            ConfigError::UnknownSeverity { value, .. } => ConfigError::UnknownSeverity {
                rule: Some(name.into()),
                value,
            },
            other => other,
        }
    }
}

fn for_rule(rule: &Option<String>) -> String {
    rule.as_ref()
        .map(|r| format!(" for '{}'", r))
        .unwrap_or_default()
}

/// Structural errors raised while splitting a header into its fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("header must start with a type (expected 'type(scope)?!?: subject')")]
    MissingType,

    #[error("header is missing the ': ' separator after '{prefix}' (expected 'type(scope)?!?: subject')")]
    MissingSeparator { prefix: String },

    #[error("subject may not be empty")]
    EmptySubject,
}

/// Result type alias for conlint operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
