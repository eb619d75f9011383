// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration file schema.
//!
//! Mirrors the layout of `conlint.toml`: one table per rule, keyed by the rule
//! name. Values are kept loose here (severity may be a word or a commitlint
//! level number) and checked when converted into a [`RuleConfig`].
//!
//! [`RuleConfig`]: super::RuleConfig

use serde::{Deserialize, Serialize};

/// The top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// `[type-enum]` table.
    #[serde(rename = "type-enum", skip_serializing_if = "Option::is_none")]
    pub type_enum: Option<TypeEnumSettings>,

    /// `[subject-case]` table.
    #[serde(rename = "subject-case", skip_serializing_if = "Option::is_none")]
    pub subject_case: Option<SubjectCaseSettings>,
}

/// Severity as written in the file: `"error"` or commitlint's `2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeverityValue {
    Level(i64),
    Name(String),
}

impl std::fmt::Display for SeverityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityValue::Level(level) => write!(f, "{}", level),
            SeverityValue::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Settings for the `type-enum` rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeEnumSettings {
    /// Rule severity.
    pub severity: SeverityValue,

    /// `always` or `never`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    /// Accepted commit types.
    #[serde(default)]
    pub allowed_types: Vec<String>,

    /// Whether type comparison is case-sensitive.
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

/// Settings for the `subject-case` rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubjectCaseSettings {
    /// Rule severity.
    pub severity: SeverityValue,

    /// `always` or `never`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<String>,

    /// Casing style names, e.g. `lower-case`.
    #[serde(default)]
    pub allowed_styles: Vec<String>,

    /// Subjects that are never checked.
    #[serde(default)]
    pub exceptions: Vec<String>,
}

fn default_case_sensitive() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert!(file.type_enum.is_none());
        assert!(file.subject_case.is_none());
    }

    #[test]
    fn test_severity_forms() {
        let file: ConfigFile = toml::from_str(
            r#"
[type-enum]
severity = 2
allowedTypes = ["feat"]

[subject-case]
severity = "warning"
allowedStyles = ["lower-case"]
"#,
        )
        .unwrap();

        let type_enum = file.type_enum.unwrap();
        assert_eq!(type_enum.severity, SeverityValue::Level(2));
        assert!(type_enum.case_sensitive);
        assert_eq!(
            file.subject_case.unwrap().severity,
            SeverityValue::Name("warning".to_string())
        );
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let result: Result<ConfigFile, _> = toml::from_str("[header-max-length]\nseverity = 2\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<ConfigFile, _> =
            toml::from_str("[type-enum]\nseverity = 2\nallowed = [\"feat\"]\n");
        assert!(result.is_err());
    }
}
