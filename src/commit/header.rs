// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit header parsing.

use crate::error::HeaderError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    /// Regex for `type(scope)?!?: subject` headers.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>\p{L}+)(?:\((?P<scope>[^()]+)\))?(?P<breaking>!)?: (?P<subject>.*)$"
    ).expect("header regex is valid");
}

/// The fields of a conventional commit header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedHeader {
    /// Commit type (feat, fix, etc.).
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Whether the header carries the `!` breaking marker.
    pub breaking: bool,
    /// Everything after the `: ` separator.
    pub subject: String,
}

impl ParsedHeader {
    /// Parse a single header line.
    ///
    /// The type is the longest run of letters at the start of the line. An
    /// optional parenthesised scope and `!` marker may follow, then the
    /// mandatory `: ` separator. The subject is not inspected beyond being
    /// non-blank.
    pub fn parse(header: &str) -> Result<Self, HeaderError> {
        let Some(captures) = HEADER_REGEX.captures(header) else {
            let prefix: String = header.chars().take_while(|c| c.is_alphabetic()).collect();
            if prefix.is_empty() {
                return Err(HeaderError::MissingType);
            }
            return Err(HeaderError::MissingSeparator { prefix });
        };

        let subject = captures
            .name("subject")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        if subject.trim().is_empty() {
            return Err(HeaderError::EmptySubject);
        }

        Ok(Self {
            commit_type: captures
                .name("type")
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            breaking: captures.name("breaking").is_some(),
            subject,
        })
    }
}

impl fmt::Display for ParsedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.commit_type)?;
        if let Some(ref scope) = self.scope {
            write!(f, "({})", scope)?;
        }
        if self.breaking {
            f.write_str("!")?;
        }
        write!(f, ": {}", self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let header = ParsedHeader::parse("feat: add login page").unwrap();
        assert_eq!(header.commit_type, "feat");
        assert_eq!(header.scope, None);
        assert!(!header.breaking);
        assert_eq!(header.subject, "add login page");
    }

    #[test]
    fn test_parse_scope_and_breaking() {
        let header = ParsedHeader::parse("refactor(api-client)!: drop v1 endpoints").unwrap();
        assert_eq!(header.commit_type, "refactor");
        assert_eq!(header.scope.as_deref(), Some("api-client"));
        assert!(header.breaking);
        assert_eq!(header.subject, "drop v1 endpoints");
    }

    #[test]
    fn test_parse_breaking_without_scope() {
        let header = ParsedHeader::parse("feature!: redesign api").unwrap();
        assert_eq!(header.commit_type, "feature");
        assert!(header.breaking);
    }

    #[test]
    fn test_subject_keeps_later_separators() {
        let header = ParsedHeader::parse("docs: note: mention the flag").unwrap();
        assert_eq!(header.subject, "note: mention the flag");
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            ParsedHeader::parse("fix add login"),
            Err(HeaderError::MissingSeparator {
                prefix: "fix".to_string()
            })
        );
        // colon without the space
        assert!(matches!(
            ParsedHeader::parse("fix:add login"),
            Err(HeaderError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn test_missing_type() {
        assert_eq!(ParsedHeader::parse(": subject"), Err(HeaderError::MissingType));
        assert_eq!(ParsedHeader::parse(""), Err(HeaderError::MissingType));
        assert_eq!(ParsedHeader::parse("123: numbers"), Err(HeaderError::MissingType));
    }

    #[test]
    fn test_malformed_scope() {
        assert!(ParsedHeader::parse("feat(core: unclosed").is_err());
        assert!(ParsedHeader::parse("feat(): empty scope").is_err());
        assert!(ParsedHeader::parse("feat(a(b)): nested").is_err());
    }

    #[test]
    fn test_type_is_letters_only() {
        // "feat2" is not a letter run followed by a separator
        assert_eq!(
            ParsedHeader::parse("feat2: thing"),
            Err(HeaderError::MissingSeparator {
                prefix: "feat".to_string()
            })
        );
    }

    #[test]
    fn test_empty_subject() {
        assert_eq!(ParsedHeader::parse("fix: "), Err(HeaderError::EmptySubject));
        assert_eq!(ParsedHeader::parse("fix:    "), Err(HeaderError::EmptySubject));
    }

    #[test]
    fn test_display() {
        let header = ParsedHeader::parse("feat(cli)!: add flag").unwrap();
        assert_eq!(header.to_string(), "feat(cli)!: add flag");
    }
}
