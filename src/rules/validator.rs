// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::config::Severity;
use crate::error::HeaderError;
use console::{style, Style};
use serde::Serialize;

/// Rule name reported when the header cannot be parsed.
pub const HEADER_FORMAT_RULE: &str = "header-format";

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the rule that produced this violation.
    pub rule: String,
    /// Warning or error.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// The offending value.
    pub actual: String,
}

impl Violation {
    /// The structural violation for a header that could not be parsed.
    pub fn header_format(err: &HeaderError, header: &str) -> Self {
        Self {
            rule: HEADER_FORMAT_RULE.to_string(),
            severity: Severity::Error,
            message: err.to_string(),
            actual: header.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the violation for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = if self.is_error() {
            (style("✗").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        format!(
            "{} {} {} [{}]",
            prefix,
            self.message,
            style(format!("'{}'", self.actual)).dim(),
            code_style.apply_to(&self.rule)
        )
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// True when no violation has error severity.
    pub valid: bool,
    /// Violations in rule evaluation order.
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Create a result, deriving `valid` from the violations.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self {
            valid: !violations.iter().any(Violation::is_error),
            violations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.is_error())
    }

    /// Get the total number of violations.
    pub fn issue_count(&self) -> usize {
        self.violations.len()
    }

    /// Print the result to stdout.
    pub fn print(&self, input: &str, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!("{}", self.to_json(input)),
            _ => println!("{}", self.render_text(input)),
        }
    }

    /// Render as text: the input header, one line per violation, then a summary.
    pub fn render_text(&self, input: &str) -> String {
        let header = input.lines().next().unwrap_or("");
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        let mut lines = vec![format!("{} {}", status, style(header).cyan())];
        lines.extend(self.violations.iter().map(|v| format!("  {}", v.format())));
        lines.push(format!("  {}", style(self.summary()).dim()));
        lines.join("\n")
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self, input: &str) -> String {
        let json = serde_json::json!({
            "input": input,
            "valid": self.valid,
            "violations": self.violations,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        let errors = self.errors().count();
        let warnings = self.warnings().count();
        if self.is_valid() {
            if warnings == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", warnings)
            }
        } else {
            format!("Invalid ({} errors, {} warnings)", errors, warnings)
        }
    }
}
