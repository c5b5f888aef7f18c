// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use console::style;

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Rule code for programmatic handling.
    pub code: String,
    /// Human-readable reason, reported to the user verbatim.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let mut output = format!(
            "{} {} {}",
            style("✗").red().bold(),
            style(&self.code).red(),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Outcome of validating one commit message.
///
/// Only the first failing rule is ever reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every rule passed, or there was nothing to judge.
    Valid,
    /// A rule failed.
    Rejected(ValidationIssue),
}

impl ValidationResult {
    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Rejected(issue) => Some(&issue.message),
        }
    }

    /// The failing rule's code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Rejected(issue) => Some(&issue.code),
        }
    }

    /// Print the result to stdout.
    pub fn print(&self, subject: Option<&str>, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!("{}", self.to_json(subject)),
            _ => self.print_text(subject),
        }
    }

    /// Print in text format.
    fn print_text(&self, subject: Option<&str>) {
        match self {
            ValidationResult::Valid => {
                let shown = subject.unwrap_or("no commit message found");
                println!("{} {}", style("✓").green().bold(), shown);
            }
            ValidationResult::Rejected(issue) => {
                if let Some(subject) = subject {
                    println!("{} {}", style("✗").red().bold(), subject);
                }
                println!("  {}", issue.format());
            }
        }
    }

    /// Render as pretty JSON.
    pub fn to_json(&self, subject: Option<&str>) -> String {
        let issue = match self {
            ValidationResult::Valid => serde_json::Value::Null,
            ValidationResult::Rejected(issue) => serde_json::json!({
                "code": issue.code,
                "message": issue.message,
                "suggestion": issue.suggestion,
            }),
        };

        let json = serde_json::json!({
            "valid": self.is_valid(),
            "subject": subject,
            "issue": issue,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}
