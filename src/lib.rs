// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-gate - Commit message gatekeeper
//!
//! A pre-execution hook that inspects shell commands proposed by an
//! automated pipeline, finds `git commit` invocations and rejects the ones
//! whose message breaks the commit policy.
//!
//! # Features
//!
//! - **Message extraction**: quoted `-m`/`--message` arguments and here-documents
//! - **Signature blocking**: rejects assistant attribution lines
//! - **Conventional Commits**: closed type set, subject length, imperative mood
//! - **Fail-open**: anything the gate cannot understand is let through
//!
//! # Example
//!
//! ```
//! use commit_gate::config::PolicyConfig;
//! use commit_gate::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(&PolicyConfig::default()).unwrap();
//!
//! assert!(engine.validate_command(r#"git commit -m "feat(x): add y""#).is_valid());
//! assert!(!engine.validate_command(r#"git commit -m "feat: added y""#).is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use config::GateConfig;
pub use error::{GateError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-gate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
