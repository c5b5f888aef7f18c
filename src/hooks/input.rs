// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Payload handed to the hook by the host pipeline.

use crate::error::{InputError, Result};
use serde::Deserialize;
use std::io::Read;

/// The tool invocation the host is about to run.
///
/// Only the fields the gate needs are modelled; missing or `null` ones read
/// as empty and anything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HookPayload {
    /// Name of the tool being invoked.
    pub tool_name: Option<String>,

    /// Arguments to the tool.
    pub tool_input: Option<ToolInput>,
}

/// Tool arguments.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolInput {
    /// The shell command, for shell tools.
    pub command: Option<String>,
}

impl HookPayload {
    /// Parse a payload from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str::<Self>(input).map_err(InputError::from)?)
    }

    /// Read and parse a payload from a reader, typically stdin.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .map_err(|e| InputError::ReadFailed {
                message: e.to_string(),
            })?;
        Self::from_json(&input)
    }

    /// Name of the tool being invoked, empty when absent.
    pub fn tool_name(&self) -> &str {
        self.tool_name.as_deref().unwrap_or_default()
    }

    /// The shell command being proposed, empty when absent.
    pub fn command(&self) -> &str {
        self.tool_input
            .as_ref()
            .and_then(|input| input.command.as_deref())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GateError;

    #[test]
    fn test_full_payload() {
        let payload = HookPayload::from_json(
            r#"{"session_id":"abc","tool_name":"Bash","tool_input":{"command":"git status","description":"check"}}"#,
        )
        .unwrap();
        assert_eq!(payload.tool_name(), "Bash");
        assert_eq!(payload.command(), "git status");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let payload = HookPayload::from_json("{}").unwrap();
        assert_eq!(payload, HookPayload::default());

        let payload = HookPayload::from_json(r#"{"tool_name":"Bash"}"#).unwrap();
        assert_eq!(payload.command(), "");
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let payload =
            HookPayload::from_json(r#"{"tool_name":null,"tool_input":{"command":null}}"#).unwrap();
        assert_eq!(payload.tool_name(), "");
        assert_eq!(payload.command(), "");

        let payload = HookPayload::from_json(r#"{"tool_name":"Bash","tool_input":null}"#).unwrap();
        assert_eq!(payload.command(), "");
    }

    #[test]
    fn test_malformed_json() {
        let err = HookPayload::from_json("not json").unwrap_err();
        assert!(matches!(err, GateError::Input(InputError::Malformed { .. })));
    }

    #[test]
    fn test_wrong_shape() {
        assert!(HookPayload::from_json("[1, 2]").is_err());
        assert!(HookPayload::from_json(r#"{"tool_input":"git commit"}"#).is_err());
    }

    #[test]
    fn test_from_reader() {
        let input = br#"{"tool_name":"Edit","tool_input":{}}"#;
        let payload = HookPayload::from_reader(&input[..]).unwrap();
        assert_eq!(payload.tool_name(), "Edit");
    }
}
