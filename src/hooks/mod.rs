// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pre-execution hook plumbing.

mod filter;
mod input;
mod runner;

pub use filter::CommandFilter;
pub use input::{HookPayload, ToolInput};
pub use runner::{evaluate, run_hook, run_hook_quietly, HookOutcome, BLOCK_EXIT_CODE};
