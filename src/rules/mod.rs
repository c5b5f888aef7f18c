// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module provides an ordered, short-circuiting set of rules that
//! commit messages are checked against.

mod builtin;
mod engine;
mod validator;

pub use builtin::*;
pub use engine::RuleEngine;
pub use validator::{ValidationIssue, ValidationResult};
