// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// commit-gate - Commit message gatekeeper
///
/// Reads a tool invocation from stdin and blocks `git commit` commands whose
/// message breaks the commit policy.
#[derive(Parser, Debug)]
#[command(name = "commit-gate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message gatekeeper for pre-execution hooks", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to hook if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "COMMIT_GATE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Read a hook payload from stdin and gate it (default command)
    Hook,

    /// Validate a commit message or shell command directly
    Check(CheckArgs),

    /// Initialize commit-gate configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["message", "command", "file"])
))]
pub struct CheckArgs {
    /// Commit message to validate
    pub message: Option<String>,

    /// Full shell command; the message is extracted from it first
    #[arg(long)]
    pub command: Option<String>,

    /// Read the commit message from a file (e.g. .git/COMMIT_EDITMSG)
    #[arg(short = 'F', long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Hook if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Hook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["commit-gate"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Hook));
    }

    #[test]
    fn test_parse_check_message() {
        let args = Cli::parse_from(["commit-gate", "check", "feat: add y"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.message.as_deref(), Some("feat: add y"));
            assert!(check_args.command.is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_check_command() {
        let args = Cli::parse_from([
            "commit-gate",
            "check",
            "--command",
            "git commit -m 'fix: y'",
        ]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.command.as_deref(), Some("git commit -m 'fix: y'"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_check_requires_a_source() {
        assert!(Cli::try_parse_from(["commit-gate", "check"]).is_err());
        assert!(Cli::try_parse_from(["commit-gate", "check", "feat: x", "--command", "y"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["commit-gate", "--debug", "--format", "json", "check", "x"]);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }
}
