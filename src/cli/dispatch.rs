// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::{extract_message, CommitMessage};
use crate::config::GateConfig;
use crate::error::{ConfigError, GateError, Result, ResultExt};
use crate::hooks::{run_hook_quietly, BLOCK_EXIT_CODE};
use crate::rules::{RuleEngine, ValidationResult};

use super::args::{CheckArgs, Cli, Commands, InitArgs};

/// Run the CLI with the given arguments, returning the process exit status.
pub fn run(cli: Cli) -> Result<i32> {
    match cli.effective_command() {
        Commands::Hook => run_hook_command(&cli),
        Commands::Check(args) => run_check(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

fn load_config(cli: &Cli) -> Result<GateConfig> {
    match &cli.config {
        Some(path) => GateConfig::load_from(path),
        None => GateConfig::load(),
    }
}

/// Run the hook command.
///
/// Configuration is loaded inside the fail-open boundary, so a broken
/// config file downgrades to a warning instead of blocking commits.
fn run_hook_command(cli: &Cli) -> Result<i32> {
    let stdin = std::io::stdin();
    let outcome = run_hook_quietly(stdin.lock(), || load_config(cli));

    tracing::debug!("Hook outcome: {:?}", outcome);

    if let Some(line) = outcome.diagnostic() {
        eprintln!("{}", line);
    }

    Ok(outcome.exit_code())
}

/// Run the check command.
fn run_check(cli: &Cli, args: CheckArgs) -> Result<i32> {
    tracing::debug!("Running check command with args: {:?}", args);

    let config = load_config(cli)?;
    let engine = RuleEngine::new(&config.policy)?;

    let message = if let Some(command) = &args.command {
        extract_message(command)
    } else if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?;
        Some(CommitMessage::new(strip_git_comments(&text)))
    } else {
        args.message.as_deref().map(CommitMessage::new)
    };

    let result = match &message {
        Some(message) => engine.validate(message),
        None => {
            tracing::debug!("No commit message found, nothing to check");
            ValidationResult::Valid
        }
    };

    result.print(message.as_ref().map(|m| m.subject()), cli.format);

    Ok(if result.is_valid() { 0 } else { BLOCK_EXIT_CODE })
}

/// Drop the `#` comment lines git puts in COMMIT_EDITMSG.
fn strip_git_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<i32> {
    use crate::config::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("commit-gate.toml");

    if config_path.exists() && !args.force {
        return Err(GateError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created commit-gate.toml");

    Ok(0)
}

/// Run the version command.
fn run_version() -> Result<i32> {
    println!("commit-gate {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(0)
}
