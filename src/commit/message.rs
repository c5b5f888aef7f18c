// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// The description part of a subject line: everything after the first ": ".
    static ref DESCRIPTION_REGEX: Regex = Regex::new(r": (?P<description>.+)$").unwrap();
}

/// A commit message as it was extracted from a shell command.
///
/// No structure is imposed on the text; the subject and body are derived on
/// demand so that rules see exactly what the user wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    text: String,
}

impl CommitMessage {
    /// Wrap raw message text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The full message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The first line, with surrounding whitespace trimmed.
    pub fn subject(&self) -> &str {
        self.text.split('\n').next().unwrap_or("").trim()
    }

    /// Everything after the first line, if anything.
    pub fn body(&self) -> Option<&str> {
        self.text
            .split_once('\n')
            .map(|(_, rest)| rest.trim())
            .filter(|rest| !rest.is_empty())
    }

    /// Subject length in characters.
    pub fn subject_len(&self) -> usize {
        self.subject().chars().count()
    }

    /// The conventional commit description, i.e. the subject after the first ": ".
    pub fn description(&self) -> Option<&str> {
        DESCRIPTION_REGEX
            .captures(self.subject())
            .and_then(|c| c.name("description"))
            .map(|m| m.as_str())
    }
}

impl std::fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
