// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-gate.
//!
//! Every fallible operation returns [`GateError`]. The hook runner turns any
//! of these into a non-blocking warning, so nothing here can stop a commit.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-gate operations.
#[derive(Error, Debug)]
pub enum GateError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Hook payload errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // Validation aborted by a fault inside the rule engine
    #[error("Internal fault: {0}")]
    Internal(String),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid pattern '{name}': {message}")]
    InvalidPattern { name: String, message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Errors reading the payload handed over by the host pipeline.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read hook input: {message}")]
    ReadFailed { message: String },

    #[error("Malformed hook input: {message}")]
    Malformed { message: String },
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        InputError::Malformed {
            message: err.to_string(),
        }
    }
}

/// Result type alias for commit-gate operations.
pub type Result<T> = std::result::Result<T, GateError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GateError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
