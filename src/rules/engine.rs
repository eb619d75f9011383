// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{CommitMessage, ParsedHeader};
use crate::config::RuleConfig;

use super::validator::{ValidationResult, Violation};

/// Run every configured rule against a parsed header.
///
/// Rules run in rule-name order; disabled rules contribute nothing.
pub fn evaluate(parsed: &ParsedHeader, config: &RuleConfig) -> Vec<Violation> {
    config.rules().filter_map(|rule| rule.check(parsed)).collect()
}

/// Validate a raw commit message.
///
/// A header that cannot be parsed yields exactly one `header-format` error
/// and no rule is evaluated.
pub fn validate(message: &str, config: &RuleConfig) -> ValidationResult {
    validate_message(&CommitMessage::parse(message), config)
}

/// Validate an already split commit message.
pub fn validate_message(message: &CommitMessage, config: &RuleConfig) -> ValidationResult {
    let parsed = match message.parse_header() {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!("Header rejected: {}", err);
            return ValidationResult::new(vec![Violation::header_format(&err, message.header())]);
        }
    };

    tracing::debug!(
        "Parsed header: type={} scope={:?} breaking={}",
        parsed.commit_type,
        parsed.scope,
        parsed.breaking
    );

    ValidationResult::new(evaluate(&parsed, config))
}

/// Rule engine owning a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: RuleConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Validate a commit message string.
    pub fn validate(&self, message: &str) -> ValidationResult {
        validate(message, &self.config)
    }

    /// Validate a parsed header without the structural check.
    pub fn evaluate(&self, parsed: &ParsedHeader) -> Vec<Violation> {
        evaluate(parsed, &self.config)
    }
}
