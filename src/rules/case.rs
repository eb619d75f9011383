// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Casing style classification.
//!
//! A piece of text usually satisfies several styles at once (`update` is
//! lower-case, camel-case, kebab-case and snake-case), so [`classify`] returns
//! the whole set instead of picking one. Every text containing a letter gets
//! at least one style.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::ConfigError;

lazy_static! {
    static ref KEBAB_REGEX: Regex =
        Regex::new(r"^[\p{Ll}\d]+(?:-[\p{Ll}\d]+)*$").expect("kebab regex is valid");
    static ref SNAKE_REGEX: Regex =
        Regex::new(r"^[\p{Ll}\d]+(?:_[\p{Ll}\d]+)*$").expect("snake regex is valid");
}

/// A recognised casing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    LowerCase,
    UpperCase,
    CamelCase,
    KebabCase,
    PascalCase,
    SentenceCase,
    SnakeCase,
    StartCase,
}

impl CaseStyle {
    /// Get the configuration name of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::LowerCase => "lower-case",
            CaseStyle::UpperCase => "upper-case",
            CaseStyle::CamelCase => "camel-case",
            CaseStyle::KebabCase => "kebab-case",
            CaseStyle::PascalCase => "pascal-case",
            CaseStyle::SentenceCase => "sentence-case",
            CaseStyle::SnakeCase => "snake-case",
            CaseStyle::StartCase => "start-case",
        }
    }

    /// Get all casing styles.
    pub fn all() -> &'static [CaseStyle] {
        &[
            CaseStyle::LowerCase,
            CaseStyle::UpperCase,
            CaseStyle::CamelCase,
            CaseStyle::KebabCase,
            CaseStyle::PascalCase,
            CaseStyle::SentenceCase,
            CaseStyle::SnakeCase,
            CaseStyle::StartCase,
        ]
    }

    /// Whether `text` is written in this style.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            CaseStyle::LowerCase => !text.chars().any(char::is_uppercase),
            CaseStyle::UpperCase => !text.chars().any(char::is_lowercase),
            CaseStyle::CamelCase => is_compound(text) && first_letter_is(text, char::is_lowercase),
            CaseStyle::PascalCase => {
                is_compound(text)
                    && first_letter_is(text, char::is_uppercase)
                    && (text.chars().count() == 1 || text.chars().any(char::is_lowercase))
            }
            CaseStyle::KebabCase => KEBAB_REGEX.is_match(text),
            CaseStyle::SnakeCase => SNAKE_REGEX.is_match(text),
            // Only the first word is constrained
            CaseStyle::SentenceCase => {
                let first = text.split_whitespace().next().unwrap_or("");
                let mut cased = first.chars().filter(|c| is_cased(*c));
                cased.next().is_some_and(char::is_uppercase) && !cased.any(char::is_uppercase)
            }
            CaseStyle::StartCase => {
                !text.contains(['-', '_'])
                    && text.split_whitespace().next().is_some()
                    && text
                        .split_whitespace()
                        .all(|word| !first_letter_is(word, char::is_lowercase))
            }
        }
    }
}

impl std::str::FromStr for CaseStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::all()
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownCaseStyle {
                style: s.to_string(),
            })
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every style that `text` is consistent with.
///
/// Mixed text that fits none of the strict styles (`add API support`,
/// `README update`) is classified by its first cased letter: camel-case when
/// it starts lowercase, pascal-case when it starts uppercase.
pub fn classify(text: &str) -> BTreeSet<CaseStyle> {
    let mut styles: BTreeSet<CaseStyle> = CaseStyle::all()
        .iter()
        .copied()
        .filter(|style| style.matches(text))
        .collect();

    if styles.is_empty() {
        if let Some(first) = text.chars().find(|c| is_cased(*c)) {
            styles.insert(if first.is_lowercase() {
                CaseStyle::CamelCase
            } else {
                CaseStyle::PascalCase
            });
        }
    }

    styles
}

/// Exactly one whitespace-separated token, punctuation included.
pub fn is_single_word(text: &str) -> bool {
    text.split_whitespace().count() == 1
}

/// Letters and digits only, as camel and pascal identifiers are written.
fn is_compound(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphanumeric)
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

fn first_letter_is(text: &str, pred: fn(char) -> bool) -> bool {
    text.chars().find(|c| is_cased(*c)).is_some_and(pred)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(text: &str) -> Vec<&'static str> {
        classify(text).iter().map(CaseStyle::as_str).collect()
    }

    #[test]
    fn test_single_lowercase_word_is_ambiguous() {
        assert_eq!(
            styles("update"),
            vec!["lower-case", "camel-case", "kebab-case", "snake-case"]
        );
    }

    #[test]
    fn test_single_capitalised_word() {
        assert_eq!(
            styles("Update"),
            vec!["pascal-case", "sentence-case", "start-case"]
        );
    }

    #[test]
    fn test_mixed_sentence() {
        assert_eq!(styles("Update README"), vec!["sentence-case", "start-case"]);
        assert_eq!(styles("Update the readme"), vec!["sentence-case"]);
        assert_eq!(styles("Add API support"), vec!["sentence-case"]);
        assert_eq!(styles("add login page"), vec!["lower-case"]);
        assert_eq!(styles("ADD LOGIN PAGE"), vec!["upper-case", "start-case"]);
    }

    #[test]
    fn test_mixed_text_falls_back_to_leading_case() {
        assert_eq!(styles("add API support"), vec!["camel-case"]);
        assert_eq!(styles("README update"), vec!["pascal-case"]);
        assert_eq!(styles("ADD login page"), vec!["pascal-case"]);
        assert_eq!(styles("2fa Login flow"), vec!["camel-case"]);
    }

    #[test]
    fn test_every_subject_with_letters_passes_when_all_styles_allowed() {
        use crate::config::{Rule, RuleConfig, Severity, SubjectCaseRule};
        use crate::rules::validate;

        let config = RuleConfig::new([Rule::from(SubjectCaseRule::new(
            Severity::Error,
            CaseStyle::all().iter().copied(),
        ))])
        .unwrap();

        for subject in [
            "Add API support",
            "add API support",
            "README update",
            "ADD login page",
            "fix iOS crash on launch",
            "bump foo-Bar to 2.0",
            "Use snake_case Names",
            "2fa Login flow",
            "update the readme",
            "Ärger mit Umlauten",
        ] {
            let result = validate(&format!("feat: {}", subject), &config);
            assert!(result.violations.is_empty(), "{:?}: {:?}", subject, result.violations);
        }
    }

    #[test]
    fn test_compound_styles() {
        assert!(classify("addLoginPage").contains(&CaseStyle::CamelCase));
        assert!(classify("AddLoginPage").contains(&CaseStyle::PascalCase));
        assert!(classify("add-login-page").contains(&CaseStyle::KebabCase));
        assert!(classify("add_login_page").contains(&CaseStyle::SnakeCase));
        assert!(!classify("add-login-page").contains(&CaseStyle::SnakeCase));
        assert!(!classify("README").contains(&CaseStyle::PascalCase));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("kebab-case".parse::<CaseStyle>(), Ok(CaseStyle::KebabCase));
        assert!(matches!(
            "title-case".parse::<CaseStyle>(),
            Err(ConfigError::UnknownCaseStyle { .. })
        ));
    }

    #[test]
    fn test_display_matches_as_str() {
        for style in CaseStyle::all() {
            assert_eq!(style.to_string(), style.as_str());
        }
    }

    #[test]
    fn test_is_single_word() {
        assert!(is_single_word("refactor"));
        assert!(is_single_word("v2"));
        assert!(is_single_word("add-login"));
        assert!(is_single_word("README.md"));
        assert!(is_single_word(" Update. "));
        assert!(!is_single_word("two words"));
        assert!(!is_single_word(""));
    }
}
