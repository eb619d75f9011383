// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module evaluates a [`RuleConfig`](crate::config::RuleConfig) against a
//! commit message and collects the violations.

mod builtin;
mod case;
mod engine;
mod validator;

pub use builtin::{check_subject_case, check_type_enum};
pub use case::{classify, is_single_word, CaseStyle};
pub use engine::{evaluate, validate, validate_message, RuleEngine};
pub use validator::{ValidationResult, Violation, HEADER_FORMAT_RULE};
