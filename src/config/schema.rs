// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from commit-gate.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for commit-gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Commit message policy.
    pub policy: PolicyConfig,

    /// How hook payloads are recognised.
    pub hook: HookConfig,
}

impl GateConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Commit message policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Maximum length of the subject line, in characters.
    pub max_subject_length: usize,

    /// Conventional commit types accepted in the subject.
    pub allowed_types: Vec<String>,

    /// Whether the `-ed` imperative mood heuristic runs.
    pub imperative_mood: bool,

    /// Example subject quoted in format rejections.
    pub example: String,

    /// Signatures that must not appear anywhere in the message.
    pub blocked_patterns: Vec<BlockedPattern>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_subject_length: 72,
            allowed_types: CommitType::all()
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
            imperative_mood: true,
            example: "feat(auth): add Google OAuth login".to_string(),
            blocked_patterns: BlockedPattern::defaults(),
        }
    }
}

/// A named signature pattern, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedPattern {
    /// Name of the pattern.
    pub name: String,

    /// Regex pattern to match.
    pub pattern: String,
}

impl BlockedPattern {
    /// Create a new blocked pattern.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Built-in assistant attribution signatures.
    pub fn defaults() -> Vec<BlockedPattern> {
        vec![
            BlockedPattern::new("generated-with", r"Generated with \[?Claude"),
            BlockedPattern::new("co-authored-claude", r"Co-Authored-By:.*Claude"),
            BlockedPattern::new("co-authored-anthropic", r"Co-Authored-By:.*Anthropic"),
            BlockedPattern::new("robot-signature", r"🤖.*Claude"),
        ]
    }
}

/// Hook payload recognition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Tool name the host uses for shell execution.
    pub tool_name: String,

    /// Literal substring marking a commit invocation.
    pub commit_marker: String,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            tool_name: "Bash".to_string(),
            commit_marker: "git commit".to_string(),
        }
    }
}

/// Commit type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Build,
    Ci,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
        }
    }

    /// Get all commit types, in the order they are listed to users.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Chore,
            CommitType::Build,
            CommitType::Ci,
        ]
    }
}
