// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::GateConfig;

/// Get the default configuration.
pub fn default_config() -> GateConfig {
    GateConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# commit-gate configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Commit message policy
[policy]
max_subject_length = 72
allowed_types = ["feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "build", "ci"]
imperative_mood = true
example = "feat(auth): add Google OAuth login"

# Signatures rejected anywhere in the message (case-insensitive).
# Listing any pattern here replaces the built-in set.
[[policy.blocked_patterns]]
name = "generated-with"
pattern = "Generated with \\[?Claude"

[[policy.blocked_patterns]]
name = "co-authored-claude"
pattern = "Co-Authored-By:.*Claude"

[[policy.blocked_patterns]]
name = "co-authored-anthropic"
pattern = "Co-Authored-By:.*Anthropic"

[[policy.blocked_patterns]]
name = "robot-signature"
pattern = "🤖.*Claude"

# Hook payload recognition
[hook]
tool_name = "Bash"
commit_marker = "git commit"
"#
}
