// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook entry point: payload in, exit decision out.

use crate::config::GateConfig;
use crate::error::{GateError, Result};
use crate::rules::{RuleEngine, ValidationResult};
use std::io::Read;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::filter::CommandFilter;
use super::input::HookPayload;

/// Exit status that tells the host to abort the tool call.
pub const BLOCK_EXIT_CODE: i32 = 2;

/// What the hook tells the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Let the command run, silently.
    Pass,
    /// Abort the command.
    Block { reason: String },
    /// Let the command run, but something inside the gate went wrong.
    WarnPass { error: String },
}

impl HookOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            HookOutcome::Block { .. } => BLOCK_EXIT_CODE,
            HookOutcome::Pass | HookOutcome::WarnPass { .. } => 0,
        }
    }

    /// The single diagnostic line for stderr, if any.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            HookOutcome::Pass => None,
            HookOutcome::Block { reason } => Some(format!("COMMIT BLOCKED: {}", reason)),
            HookOutcome::WarnPass { error } => Some(format!("Commit validator warning: {}", error)),
        }
    }

    /// Whether the host should abort the command.
    pub fn is_blocking(&self) -> bool {
        matches!(self, HookOutcome::Block { .. })
    }
}

impl From<GateError> for HookOutcome {
    fn from(err: GateError) -> Self {
        tracing::debug!("Failing open: {}", err);
        // Keep the diagnostic on one line; regex errors span several.
        HookOutcome::WarnPass {
            error: err.to_string().split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}

/// Decide on a single tool invocation.
///
/// The filter only needs `config.hook`, so invocations that are not commits
/// pass before the policy is compiled and a broken policy cannot touch them.
pub fn evaluate(config: &GateConfig, payload: &HookPayload) -> Result<HookOutcome> {
    let filter = CommandFilter::new(&config.hook);
    if !filter.should_validate(payload.tool_name(), payload.command()) {
        tracing::debug!("Not a commit invocation ({}), allowing", payload.tool_name());
        return Ok(HookOutcome::Pass);
    }

    let engine = RuleEngine::new(&config.policy)?;
    Ok(match engine.validate_command(payload.command()) {
        ValidationResult::Valid => HookOutcome::Pass,
        ValidationResult::Rejected(issue) => HookOutcome::Block {
            reason: issue.message,
        },
    })
}

/// Run the hook against a payload reader.
///
/// Never fails: configuration errors, malformed payloads and panics inside
/// validation all come back as [`HookOutcome::WarnPass`].
pub fn run_hook<R, F>(input: R, load_config: F) -> HookOutcome
where
    R: Read,
    F: FnOnce() -> Result<GateConfig>,
{
    let run = || -> Result<HookOutcome> {
        let config = load_config()?;
        let payload = HookPayload::from_reader(input)?;
        evaluate(&config, &payload)
    };

    match catch_unwind(AssertUnwindSafe(run)) {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(err)) => err.into(),
        Err(panic) => {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            GateError::Internal(message).into()
        }
    }
}

/// [`run_hook`] with the panic hook silenced, so a caught panic leaves only
/// the warning line on stderr.
///
/// Swaps the process-wide panic hook; meant for the single-threaded binary.
pub fn run_hook_quietly<R, F>(input: R, load_config: F) -> HookOutcome
where
    R: Read,
    F: FnOnce() -> Result<GateConfig>,
{
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!("Panic inside commit validation: {}", info);
    }));

    let outcome = run_hook(input, load_config);

    std::panic::set_hook(previous);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BlockedPattern, PolicyConfig};

    fn run(json: &str) -> HookOutcome {
        run_hook(json.as_bytes(), || Ok(GateConfig::default()))
    }

    fn bash(command: &str) -> String {
        serde_json::json!({
            "tool_name": "Bash",
            "tool_input": { "command": command }
        })
        .to_string()
    }

    #[test]
    fn test_valid_commit_passes() {
        assert_eq!(run(&bash(r#"git commit -m "feat(x): add y""#)), HookOutcome::Pass);
    }

    #[test]
    fn test_bad_commit_blocks() {
        let outcome = run(&bash(r#"git commit -m "feat: added login page""#));
        assert!(outcome.is_blocking());
        assert_eq!(outcome.exit_code(), 2);
        assert!(outcome
            .diagnostic()
            .unwrap()
            .starts_with("COMMIT BLOCKED: Use imperative mood"));
    }

    #[test]
    fn test_other_tools_pass_regardless() {
        let json = serde_json::json!({
            "tool_name": "Write",
            "tool_input": { "command": "git commit -m \"garbage\"" }
        })
        .to_string();
        assert_eq!(run(&json), HookOutcome::Pass);
    }

    #[test]
    fn test_non_commit_passes() {
        assert_eq!(run(&bash("cargo build")), HookOutcome::Pass);
    }

    #[test]
    fn test_unextractable_commit_passes() {
        assert_eq!(run(&bash("git commit -F message.txt")), HookOutcome::Pass);
    }

    #[test]
    fn test_empty_payload_passes() {
        assert_eq!(run("{}"), HookOutcome::Pass);
    }

    #[test]
    fn test_malformed_payload_warns() {
        let outcome = run("{{{");
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome
            .diagnostic()
            .unwrap()
            .starts_with("Commit validator warning: "));
    }

    #[test]
    fn test_config_error_warns() {
        let outcome = run_hook(bash("git commit -m 'bad'").as_bytes(), || {
            Err(GateError::Internal("config exploded".to_string()))
        });
        assert!(matches!(outcome, HookOutcome::WarnPass { .. }));
        assert!(outcome.diagnostic().unwrap().contains("config exploded"));
    }

    #[test]
    fn test_bad_pattern_warns() {
        let config = GateConfig {
            policy: PolicyConfig {
                blocked_patterns: vec![BlockedPattern::new("broken", "(")],
                ..PolicyConfig::default()
            },
            ..GateConfig::default()
        };
        let outcome = run_hook(bash("git commit -m 'bad'").as_bytes(), || Ok(config));
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.diagnostic().unwrap().contains("broken"));
    }

    #[test]
    fn test_bad_pattern_ignored_for_non_commits() {
        let config = GateConfig {
            policy: PolicyConfig {
                blocked_patterns: vec![BlockedPattern::new("broken", "(")],
                ..PolicyConfig::default()
            },
            ..GateConfig::default()
        };
        let json = r#"{"tool_name":"Edit","tool_input":{"command":"ls"}}"#;
        assert_eq!(run_hook(json.as_bytes(), || Ok(config.clone())), HookOutcome::Pass);
        assert_eq!(run_hook(bash("cargo build").as_bytes(), || Ok(config)), HookOutcome::Pass);
    }

    #[test]
    fn test_warning_is_single_line() {
        let config = GateConfig {
            policy: PolicyConfig {
                blocked_patterns: vec![BlockedPattern::new("broken", "(")],
                ..PolicyConfig::default()
            },
            ..GateConfig::default()
        };
        let outcome = run_hook(bash("git commit -m 'bad'").as_bytes(), || Ok(config));
        let line = outcome.diagnostic().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains("unclosed group"));
    }

    #[test]
    fn test_null_tool_name_passes() {
        let json = r#"{"tool_name":null,"tool_input":{"command":"git commit -m 'bad'"}}"#;
        assert_eq!(run(json), HookOutcome::Pass);
    }

    #[test]
    fn test_quiet_panic_warns() {
        let outcome = run_hook_quietly("{}".as_bytes(), || panic!("quiet boom"));
        assert_eq!(
            outcome,
            HookOutcome::WarnPass {
                error: "Internal fault: quiet boom".to_string()
            }
        );
    }

    #[test]
    fn test_panic_warns() {
        let outcome = run_hook("{}".as_bytes(), || panic!("boom"));
        assert_eq!(
            outcome,
            HookOutcome::WarnPass {
                error: "Internal fault: boom".to_string()
            }
        );
    }
}
