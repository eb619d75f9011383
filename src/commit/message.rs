// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and splitting.

use lazy_static::lazy_static;
use regex::Regex;

use super::header::ParsedHeader;
use crate::error::HeaderError;

lazy_static! {
    /// First line of a footer paragraph: `Token: value` or `Token #value`.
    static ref FOOTER_REGEX: Regex =
        Regex::new(r"^(?:BREAKING[ -]CHANGE|[\w-]+)(?:: | #)\S").expect("footer regex is valid");

    /// A breaking change trailer anywhere in the footer.
    static ref BREAKING_REGEX: Regex =
        Regex::new(r"(?m)^BREAKING[ -]CHANGE: ").expect("breaking regex is valid");
}

/// A commit message split into header, body and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    raw: String,
    header: String,
    body: Option<String>,
    footer: Option<String>,
}

impl CommitMessage {
    /// Split a raw commit message.
    ///
    /// The header is the first line. Remaining lines are grouped into
    /// blank-line separated paragraphs; the last paragraph is the footer when
    /// its first line looks like a trailer, everything else is the body.
    pub fn parse(raw: &str) -> Self {
        let mut lines = raw.lines();
        let header = lines.next().unwrap_or("").to_string();

        let mut paragraphs: Vec<Vec<&str>> = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current);
        }

        let has_footer = paragraphs
            .last()
            .and_then(|p| p.first())
            .is_some_and(|l| FOOTER_REGEX.is_match(l));
        let footer = if has_footer {
            paragraphs.pop().map(|p| p.join("\n"))
        } else {
            None
        };

        let body = if paragraphs.is_empty() {
            None
        } else {
            Some(
                paragraphs
                    .iter()
                    .map(|p| p.join("\n"))
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            )
        };

        Self {
            raw: raw.to_string(),
            header,
            body,
            footer,
        }
    }

    /// The message exactly as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The first line.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Parse the header into its conventional commit fields.
    pub fn parse_header(&self) -> Result<ParsedHeader, HeaderError> {
        ParsedHeader::parse(&self.header)
    }

    /// Whether the footer carries a `BREAKING CHANGE:` trailer.
    pub fn has_breaking_footer(&self) -> bool {
        self.footer
            .as_deref()
            .is_some_and(|f| BREAKING_REGEX.is_match(f))
    }

    /// Whether this is a breaking change, from either the header marker or the footer.
    pub fn is_breaking(&self) -> bool {
        self.has_breaking_footer() || self.parse_header().map(|h| h.breaking).unwrap_or(false)
    }
}
