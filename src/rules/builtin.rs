// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::ParsedHeader;
use crate::config::{Condition, Rule, RuleName, SubjectCaseRule, TypeEnumRule};

use super::case::{classify, is_single_word, CaseStyle};
use super::validator::Violation;

impl Rule {
    /// Check a parsed header against this rule.
    ///
    /// Disabled rules never report anything.
    pub fn check(&self, header: &ParsedHeader) -> Option<Violation> {
        if !self.is_enabled() {
            return None;
        }

        match self {
            Rule::TypeEnum(rule) => check_type_enum(header, rule),
            Rule::SubjectCase(rule) => check_subject_case(header, rule),
        }
    }
}

/// Check the commit type against the allowed set.
pub fn check_type_enum(header: &ParsedHeader, rule: &TypeEnumRule) -> Option<Violation> {
    let type_str = header.commit_type.as_str();

    let listed = if rule.case_sensitive {
        rule.allowed_types.contains(type_str)
    } else {
        let lower = type_str.to_lowercase();
        rule.allowed_types.iter().any(|t| t.to_lowercase() == lower)
    };

    let types = rule
        .allowed_types
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let message = match (rule.when, listed) {
        (Condition::Always, false) => format!("type '{}' is not one of [{}]", type_str, types),
        (Condition::Never, true) => format!("type '{}' must not be one of [{}]", type_str, types),
        _ => return None,
    };

    Some(Violation {
        rule: RuleName::TypeEnum.to_string(),
        severity: rule.severity,
        message,
        actual: type_str.to_string(),
    })
}

/// Check the casing of the subject.
pub fn check_subject_case(header: &ParsedHeader, rule: &SubjectCaseRule) -> Option<Violation> {
    let subject = header.subject.trim();

    // Nothing to judge: exempted, no letters, or a single ambiguous token
    if rule.exceptions.contains(subject)
        || !subject.chars().any(char::is_alphabetic)
        || is_single_word(subject)
    {
        return None;
    }

    let styles = classify(subject);
    let message = match rule.when {
        Condition::Always if styles.is_disjoint(&rule.allowed_styles) => {
            format!("subject must be {}", join_styles(rule.allowed_styles.iter()))
        }
        Condition::Never if !styles.is_disjoint(&rule.allowed_styles) => {
            format!(
                "subject must not be {}",
                join_styles(styles.intersection(&rule.allowed_styles))
            )
        }
        _ => return None,
    };

    Some(Violation {
        rule: RuleName::SubjectCase.to_string(),
        severity: rule.severity,
        message,
        actual: header.subject.clone(),
    })
}

fn join_styles<'a>(styles: impl Iterator<Item = &'a CaseStyle>) -> String {
    styles.map(CaseStyle::as_str).collect::<Vec<_>>().join(" or ")
}
