// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validated rule configuration.
//!
//! A [`RuleConfig`] can only be built from settings that make sense, so the
//! validator never has to deal with a bad severity or an empty type list.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::schema::{ConfigFile, SeverityValue, SubjectCaseSettings, TypeEnumSettings};
use crate::error::ConfigError;
use crate::rules::CaseStyle;

/// How a rule outcome is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Disabled,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Read a severity from the file, accepting names and commitlint levels 0-2.
    pub fn from_value(rule: RuleName, value: &SeverityValue) -> Result<Self, ConfigError> {
        match value {
            SeverityValue::Level(0) => Ok(Severity::Disabled),
            SeverityValue::Level(1) => Ok(Severity::Warning),
            SeverityValue::Level(2) => Ok(Severity::Error),
            SeverityValue::Name(name) => name
                .parse()
                .map_err(|e: ConfigError| e.in_rule(rule.as_str())),
            SeverityValue::Level(_) => Err(ConfigError::UnknownSeverity {
                rule: Some(rule.to_string()),
                value: value.to_string(),
            }),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(Severity::Disabled),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(ConfigError::UnknownSeverity {
                rule: None,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the rule condition must hold (`always`) or must not hold (`never`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    Always,
    Never,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Always => "always",
            Condition::Never => "never",
        }
    }

    fn from_setting(rule: RuleName, value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            None | Some("always") => Ok(Condition::Always),
            Some("never") => Ok(Condition::Never),
            Some(other) => Err(ConfigError::UnknownCondition {
                rule: rule.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Names of the supported rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleName {
    #[serde(rename = "subject-case")]
    SubjectCase,
    #[serde(rename = "type-enum")]
    TypeEnum,
}

impl RuleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::SubjectCase => "subject-case",
            RuleName::TypeEnum => "type-enum",
        }
    }
}

// Evaluation order is the lexicographic order of the rule names.
impl Ord for RuleName {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for RuleName {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Settings of the `type-enum` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEnumRule {
    pub severity: Severity,
    pub when: Condition,
    pub allowed_types: BTreeSet<String>,
    pub case_sensitive: bool,
}

impl TypeEnumRule {
    /// An `always`, case-sensitive rule over the given types.
    pub fn new<I, S>(severity: Severity, allowed_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            severity,
            when: Condition::Always,
            allowed_types: allowed_types.into_iter().map(Into::into).collect(),
            case_sensitive: true,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    pub fn with_condition(mut self, when: Condition) -> Self {
        self.when = when;
        self
    }
}

/// Settings of the `subject-case` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCaseRule {
    pub severity: Severity,
    pub when: Condition,
    pub allowed_styles: BTreeSet<CaseStyle>,
    pub exceptions: BTreeSet<String>,
}

impl SubjectCaseRule {
    pub fn new(severity: Severity, allowed_styles: impl IntoIterator<Item = CaseStyle>) -> Self {
        Self {
            severity,
            when: Condition::Always,
            allowed_styles: allowed_styles.into_iter().collect(),
            exceptions: BTreeSet::new(),
        }
    }

    /// A rule that is never evaluated.
    pub fn disabled() -> Self {
        Self::new(Severity::Disabled, [])
    }

    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions = exceptions
            .into_iter()
            .map(|e| {
                let e: String = e.into();
                e.trim().to_string()
            })
            .collect();
        self
    }

    pub fn with_condition(mut self, when: Condition) -> Self {
        self.when = when;
        self
    }
}

/// One configured rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    TypeEnum(TypeEnumRule),
    SubjectCase(SubjectCaseRule),
}

impl Rule {
    pub fn name(&self) -> RuleName {
        match self {
            Rule::TypeEnum(_) => RuleName::TypeEnum,
            Rule::SubjectCase(_) => RuleName::SubjectCase,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Rule::TypeEnum(rule) => rule.severity,
            Rule::SubjectCase(rule) => rule.severity,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.severity() != Severity::Disabled
    }

    /// Reject settings that cannot be evaluated meaningfully.
    fn check_settings(&self) -> Result<(), ConfigError> {
        if !self.is_enabled() {
            return Ok(());
        }

        match self {
            Rule::TypeEnum(rule) => {
                if rule.allowed_types.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: "type-enum.allowedTypes".to_string(),
                        message: "must not be empty while the rule is enabled".to_string(),
                    });
                }
                if rule.allowed_types.iter().any(|t| t.trim().is_empty()) {
                    return Err(ConfigError::InvalidValue {
                        key: "type-enum.allowedTypes".to_string(),
                        message: "types may not be blank".to_string(),
                    });
                }
            }
            Rule::SubjectCase(rule) => {
                if rule.allowed_styles.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: "subject-case.allowedStyles".to_string(),
                        message: "must not be empty while the rule is enabled".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl From<TypeEnumRule> for Rule {
    fn from(rule: TypeEnumRule) -> Self {
        Rule::TypeEnum(rule)
    }
}

impl From<SubjectCaseRule> for Rule {
    fn from(rule: SubjectCaseRule) -> Self {
        Rule::SubjectCase(rule)
    }
}

/// The full, validated set of rules to apply.
///
/// Rules that are not present are not evaluated. The default configuration
/// has no rules at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleConfig {
    rules: BTreeMap<RuleName, Rule>,
}

impl RuleConfig {
    /// Build a configuration, failing on the first invalid or duplicate rule.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Result<Self, ConfigError> {
        let mut map = BTreeMap::new();
        for rule in rules {
            rule.check_settings()?;
            let name = rule.name();
            if map.insert(name, rule).is_some() {
                return Err(ConfigError::InvalidValue {
                    key: name.to_string(),
                    message: "rule configured more than once".to_string(),
                });
            }
        }
        Ok(Self { rules: map })
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn get(&self, name: RuleName) -> Option<&Rule> {
        self.rules.get(&name)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl TryFrom<ConfigFile> for RuleConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let mut rules = Vec::new();
        if let Some(settings) = file.type_enum {
            rules.push(Rule::TypeEnum(type_enum_from(settings)?));
        }
        if let Some(settings) = file.subject_case {
            rules.push(Rule::SubjectCase(subject_case_from(settings)?));
        }
        RuleConfig::new(rules)
    }
}

fn type_enum_from(settings: TypeEnumSettings) -> Result<TypeEnumRule, ConfigError> {
    let name = RuleName::TypeEnum;
    Ok(TypeEnumRule {
        severity: Severity::from_value(name, &settings.severity)?,
        when: Condition::from_setting(name, settings.when.as_deref())?,
        allowed_types: settings.allowed_types.into_iter().collect(),
        case_sensitive: settings.case_sensitive,
    })
}

fn subject_case_from(settings: SubjectCaseSettings) -> Result<SubjectCaseRule, ConfigError> {
    let name = RuleName::SubjectCase;
    let allowed_styles = settings
        .allowed_styles
        .iter()
        .map(|s| s.parse::<CaseStyle>())
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok(SubjectCaseRule {
        severity: Severity::from_value(name, &settings.severity)?,
        when: Condition::from_setting(name, settings.when.as_deref())?,
        allowed_styles,
        exceptions: settings
            .exceptions
            .iter()
            .map(|e| e.trim().to_string())
            .collect(),
    })
}
