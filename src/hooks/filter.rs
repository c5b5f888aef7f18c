// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Cheap pre-check deciding whether a command is worth validating.

use crate::config::HookConfig;

/// Decides which tool invocations reach the validator.
///
/// Anything not recognised is let through unconditionally.
#[derive(Debug, Clone)]
pub struct CommandFilter {
    tool_name: String,
    commit_marker: String,
}

impl CommandFilter {
    /// Create a filter from hook configuration.
    pub fn new(config: &HookConfig) -> Self {
        Self {
            tool_name: config.tool_name.clone(),
            commit_marker: config.commit_marker.clone(),
        }
    }

    /// Whether this invocation should be validated.
    pub fn should_validate(&self, tool_name: &str, command: &str) -> bool {
        tool_name == self.tool_name && command.contains(&self.commit_marker)
    }
}

impl Default for CommandFilter {
    fn default() -> Self {
        Self::new(&HookConfig::default())
    }
}
