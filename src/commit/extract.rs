// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message extraction from shell commands.
//!
//! Strategies are tried in order and the first one that recognises the
//! command wins. A command nothing recognises yields `None`, which callers
//! treat as "not ours to judge".

use lazy_static::lazy_static;
use regex::Regex;

use super::message::CommitMessage;

lazy_static! {
    /// `git commit ... -m "msg"`, `--message='msg'` and friends. Quotes must match.
    static ref QUOTED_REGEX: Regex = Regex::new(
        r#"(?s)git\s+commit.*?(?:-m|--message)[=\s]+(?:"(?P<double>.+?)"|'(?P<single>.+?)')"#
    ).unwrap();

    /// `git commit -m "$(cat <<'EOF' ... EOF)"`. The marker may be quoted or dash-prefixed.
    static ref HEREDOC_REGEX: Regex = Regex::new(
        r#"(?s)git\s+commit.*?-m.*?<<-?\s*['"]?EOF['"]?(?P<message>.*?)EOF"#
    ).unwrap();
}

/// A way of locating the message inside a shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// A quoted `-m` / `--message` argument.
    Quoted,
    /// A here-document fed to `-m`.
    HereDoc,
}

impl ExtractionStrategy {
    /// All strategies, in the order they are tried.
    pub fn all() -> &'static [ExtractionStrategy] {
        &[ExtractionStrategy::Quoted, ExtractionStrategy::HereDoc]
    }

    /// Try this strategy against a command.
    pub fn extract(&self, command: &str) -> Option<CommitMessage> {
        match self {
            ExtractionStrategy::Quoted => extract_quoted(command),
            ExtractionStrategy::HereDoc => extract_heredoc(command),
        }
    }

    /// Short name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStrategy::Quoted => "quoted",
            ExtractionStrategy::HereDoc => "heredoc",
        }
    }
}

/// Extract the commit message from a shell command, if one can be found.
pub fn extract_message(command: &str) -> Option<CommitMessage> {
    ExtractionStrategy::all().iter().find_map(|strategy| {
        let message = strategy.extract(command)?;
        tracing::debug!("Extracted commit message using {} strategy", strategy.as_str());
        Some(message)
    })
}

fn extract_quoted(command: &str) -> Option<CommitMessage> {
    let captures = QUOTED_REGEX.captures(command)?;
    let value = captures
        .name("double")
        .or_else(|| captures.name("single"))?
        .as_str();

    // A quoted command substitution wrapping a here-document is not a literal
    // message; leave it to the here-document strategy.
    if value.trim_start().starts_with("$(") && value.contains("<<") {
        return None;
    }

    Some(CommitMessage::new(value))
}

fn extract_heredoc(command: &str) -> Option<CommitMessage> {
    let captures = HEREDOC_REGEX.captures(command)?;
    let message = captures.name("message")?.as_str().trim();
    Some(CommitMessage::new(message))
}
