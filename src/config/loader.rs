// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, GateError, Result};
use std::path::{Path, PathBuf};

use super::schema::GateConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "commit-gate.toml",
    ".commit-gate.toml",
    ".config/commit-gate.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = first_existing(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = first_existing(&home) {
            return Some(found);
        }
    }

    // XDG config directory
    let xdg = dirs::config_dir()?.join("commit-gate").join("config.toml");
    xdg.exists().then_some(xdg)
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<GateConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(GateConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<GateConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(GateError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GateError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<GateConfig> {
    let config: GateConfig = toml::from_str(content).map_err(|e| {
        GateError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    check_config(&config)?;
    Ok(config)
}

/// Reject values that would make every commit fail.
fn check_config(config: &GateConfig) -> Result<()> {
    if config.policy.max_subject_length == 0 {
        return Err(GateError::Config(ConfigError::InvalidValue {
            key: "policy.max_subject_length".to_string(),
            message: "must be greater than zero".to_string(),
        }));
    }

    if config.policy.allowed_types.is_empty() {
        return Err(GateError::Config(ConfigError::InvalidValue {
            key: "policy.allowed_types".to_string(),
            message: "at least one commit type is required".to_string(),
        }));
    }

    if config.hook.commit_marker.trim().is_empty() {
        return Err(GateError::Config(ConfigError::InvalidValue {
            key: "hook.commit_marker".to_string(),
            message: "must not be empty".to_string(),
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.policy.max_subject_length, 72);
        assert!(config.policy.imperative_mood);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[policy]
max_subject_length = 50
allowed_types = ["feat", "fix"]
imperative_mood = false

[hook]
tool_name = "Shell"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.policy.max_subject_length, 50);
        assert_eq!(config.policy.allowed_types, vec!["feat", "fix"]);
        assert!(!config.policy.imperative_mood);
        assert_eq!(config.hook.tool_name, "Shell");
        assert_eq!(config.hook.commit_marker, "git commit");
    }

    #[test]
    fn test_blocked_patterns_replace_defaults() {
        let toml = r#"
[[policy.blocked_patterns]]
name = "copilot"
pattern = "Generated by Copilot"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.policy.blocked_patterns.len(), 1);
        assert_eq!(config.policy.blocked_patterns[0].name, "copilot");
    }

    #[test]
    fn test_rejects_empty_types() {
        let toml = r#"
[policy]
allowed_types = []
"#;
        let err = parse_config(toml).unwrap_err();
        assert!(err.to_string().contains("policy.allowed_types"));
    }

    #[test]
    fn test_rejects_zero_length() {
        let err = parse_config("[policy]\nmax_subject_length = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_subject_length"));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = parse_config("[policy\n").unwrap_err();
        assert!(matches!(
            err,
            GateError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, GateError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(".commit-gate.toml"), "").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".commit-gate.toml"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commit-gate.toml");
        fs::write(&path, "[policy]\nmax_subject_length = 60\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.policy.max_subject_length, 60);
    }
}
