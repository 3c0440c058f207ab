//! Error types and handling for the CLI
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use fieldsmith_core::{ErrorScope, ValidationError};
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A field or the assembled object failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {}", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Validation(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::InvalidFormat { .. } => 4,
            Self::Config(_) => 5,
            Self::InvalidArgs(_) => 6,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

/// Format an error for display to the user
///
/// Validation errors list each violation on its own line.
pub fn format_error(error: &Error, use_color: bool) -> String {
    use colored::Colorize;

    let header = if use_color {
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    };

    let Error::Validation(validation) = error else {
        return header;
    };

    let mut lines = vec![header];
    for violation in &validation.violations {
        let location = match (&validation.scope, &violation.field) {
            (ErrorScope::Object, Some(field)) => format!("{}: ", field),
            _ => String::new(),
        };
        let line = format!("  - {}{}", location, violation);
        lines.push(if use_color {
            line.yellow().to_string()
        } else {
            line
        });
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsmith_core::Violation;

    #[test]
    fn test_exit_codes() {
        let validation = Error::from(ValidationError::object("incomplete"));
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(Error::config("bad").exit_code(), 5);
        assert_eq!(Error::other("boom").exit_code(), 99);
        assert!(Error::invalid_args("x").should_show_help());
        assert!(!validation.should_show_help());
    }

    #[test]
    fn test_format_validation_error_plain() {
        let error = Error::from(ValidationError::object_violation(
            Violation::new("required", "a value", "nothing").at("email"),
        ));

        let formatted = format_error(&error, false);
        let mut lines = formatted.lines();
        assert!(lines.next().unwrap().starts_with("Error: Validation error for object"));
        assert_eq!(
            lines.next().unwrap(),
            "  - email: Rule 'required' violated: expected a value, but found nothing"
        );
    }

    #[test]
    fn test_format_other_error_plain() {
        let formatted = format_error(&Error::other("boom"), false);
        assert_eq!(formatted, "Error: boom");
    }
}
