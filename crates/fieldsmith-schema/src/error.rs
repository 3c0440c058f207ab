//! Validation error types shared by schemas and builders
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A validation violation with detailed context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Field the violation was found on, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The validation rule that was violated
    pub rule: String,
    /// What was expected
    pub expected: String,
    /// What was actually found
    pub actual: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule '{}' violated: expected {}, but found {}",
            self.rule, self.expected, self.actual
        )
    }
}

impl Violation {
    /// Create a violation that is not yet attached to a field
    pub fn new<R, E, A>(rule: R, expected: E, actual: A) -> Self
    where
        R: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Self {
            field: None,
            rule: rule.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Attach the violation to a field
    pub fn at<F: Into<String>>(mut self, field: F) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// What a validation error refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ErrorScope {
    /// A single field, raised by a setter
    Field(String),
    /// The assembled object, raised by a whole-object check
    Object,
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorScope::Field(name) => write!(f, "{}", name),
            ErrorScope::Object => write!(f, "object"),
        }
    }
}

/// Validation error raised by a field setter or by a whole-object check
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field or object the error refers to
    pub scope: ErrorScope,
    /// Human-readable error message
    pub message: String,
    /// Detailed violations behind the error
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error for {}: {}", self.scope, self.message)
    }
}

impl ValidationError {
    /// Create a new validation error
    pub fn new<M: Into<String>>(scope: ErrorScope, message: M) -> Self {
        Self {
            scope,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Create a validation error with violations
    pub fn with_violations<M: Into<String>>(
        scope: ErrorScope,
        message: M,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            scope,
            message: message.into(),
            violations,
        }
    }

    /// Create a field-scoped error from the violation a validator reported
    pub fn field<F: Into<String>>(field: F, violation: Violation) -> Self {
        let field = field.into();
        let message = violation.to_string();
        Self::with_violations(
            ErrorScope::Field(field.clone()),
            message,
            vec![violation.at(field)],
        )
    }

    /// Create an object-scoped error with a plain message
    pub fn object<M: Into<String>>(message: M) -> Self {
        Self::new(ErrorScope::Object, message)
    }

    /// Create an object-scoped error for a violation found on one field
    pub fn object_violation(violation: Violation) -> Self {
        let message = match &violation.field {
            Some(field) => format!("field '{}': {}", field, violation),
            None => violation.to_string(),
        };
        Self::with_violations(ErrorScope::Object, message, vec![violation])
    }

    /// Add a violation to this error
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Create a violation for a specific rule
    pub fn create_violation<R, E, A>(rule: R, expected: E, actual: A) -> Violation
    where
        R: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Violation::new(rule, expected, actual)
    }

    /// Name of the field behind this error, if one is known
    ///
    /// For object-scoped errors this is the field of the first violation.
    pub fn field_name(&self) -> Option<&str> {
        match &self.scope {
            ErrorScope::Field(name) => Some(name),
            ErrorScope::Object => self
                .violations
                .first()
                .and_then(|violation| violation.field.as_deref()),
        }
    }

    /// Whether the error came from a whole-object check
    pub fn is_object(&self) -> bool {
        self.scope == ErrorScope::Object
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let error = ValidationError::field("age", Violation::new("min", "a number >= 0", "number -5"));
        assert_eq!(error.scope, ErrorScope::Field("age".to_string()));
        assert_eq!(
            error.to_string(),
            "Validation error for age: Rule 'min' violated: expected a number >= 0, but found number -5"
        );
        assert_eq!(error.violations[0].field.as_deref(), Some("age"));
    }

    #[test]
    fn test_object_violation_names_field() {
        let error = ValidationError::object_violation(
            Violation::new("required", "a value", "nothing").at("email"),
        );
        assert!(error.is_object());
        assert_eq!(error.field_name(), Some("email"));
        assert!(error.to_string().starts_with("Validation error for object: field 'email'"));
    }

    #[test]
    fn test_plain_object_error_has_no_field() {
        let error = ValidationError::object("cannot assemble user");
        assert_eq!(error.field_name(), None);
        assert!(error.violations.is_empty());
    }

    #[test]
    fn test_error_serializes_scope() {
        let error = ValidationError::field("name", Violation::new("min_length", "at least 1 character", "string \"\""));
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["scope"]["kind"], "field");
        assert_eq!(json["scope"]["name"], "name");

        let object = serde_json::to_value(ValidationError::object("x")).unwrap();
        assert_eq!(object["scope"]["kind"], "object");
    }
}
