// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling.
//!
//! This module locates commit messages inside shell commands and exposes
//! the pieces the rules look at.

mod extract;
mod message;

pub use extract::{extract_message, ExtractionStrategy};
pub use message::CommitMessage;
