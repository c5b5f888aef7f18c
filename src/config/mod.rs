// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-gate.
//!
//! Loads the commit policy and hook settings from a TOML file, falling back
//! to built-in defaults when none is found.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
