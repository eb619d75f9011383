// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! conlint - Conventional Commit Message Linter
//!
//! Validates commit messages of the form `type(scope)?!?: subject` against a
//! configurable set of rules.
//!
//! # Features
//!
//! - **Header Parsing**: Type, scope, breaking marker and subject extraction
//! - **Message Splitting**: Header, body and trailer footer detection
//! - **Rules**: `type-enum` and `subject-case` with `disabled`/`warning`/`error` severities
//! - **Fail-fast Configuration**: Bad settings are rejected before any message is checked
//!
//! # Example
//!
//! ```
//! use conlint::config::{Rule, RuleConfig, Severity, SubjectCaseRule, TypeEnumRule};
//!
//! let config = RuleConfig::new([
//!     Rule::from(TypeEnumRule::new(Severity::Error, ["feat", "fix"])),
//!     Rule::from(SubjectCaseRule::disabled()),
//! ])
//! .unwrap();
//!
//! let result = conlint::validate("feat: add login page", &config);
//! assert!(result.valid);
//!
//! let result = conlint::validate("update: tweak css", &config);
//! assert!(!result.valid);
//! assert_eq!(result.violations[0].actual, "update");
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use config::{RuleConfig, Severity};
pub use error::{LintError, Result};
pub use rules::{validate, ValidationResult, Violation};
