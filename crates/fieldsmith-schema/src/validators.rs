//! Stock field validators
//!
//! Each function returns a [`Rule`], a cheap-to-clone [`FieldValidator`] that
//! reports a [`Violation`] describing what it expected and what it found.
//! Rules compose with [`Rule::and`]; anything else can be written as a plain
//! closure `Fn(&Value) -> Result<(), Violation>`.
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use crate::error::Violation;
use crate::schema::FieldValidator;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, OnceLock};

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static UUID_REGEX: OnceLock<Regex> = OnceLock::new();

type Check = dyn Fn(&Value) -> Result<(), Violation> + Send + Sync;

/// A reusable, composable field validator
#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    check: Arc<Check>,
}

impl Rule {
    /// Wrap a check function under a rule name
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&Value) -> Result<(), Violation> + Send + Sync + 'static,
    {
        Self {
            name,
            check: Arc::new(check),
        }
    }

    /// Name of the rule, used in violations
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run `next` after this rule succeeds
    pub fn and<V>(self, next: V) -> Self
    where
        V: FieldValidator + 'static,
    {
        let first = self.check;
        Self {
            name: self.name,
            check: Arc::new(move |value: &Value| {
                (*first)(value)?;
                next.validate(value)
            }),
        }
    }
}

impl FieldValidator for Rule {
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        (*self.check)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Describe a value for the `actual` half of a violation
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(items) => format!("array of {} items", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}

fn expect_str<'a>(rule: &str, value: &'a Value) -> Result<&'a str, Violation> {
    value
        .as_str()
        .ok_or_else(|| Violation::new(rule, "a string", describe(value)))
}

fn expect_f64(rule: &str, value: &Value) -> Result<f64, Violation> {
    value
        .as_f64()
        .ok_or_else(|| Violation::new(rule, "a number", describe(value)))
}

/// Accept every value
pub fn any() -> Rule {
    Rule::new("any", |_| Ok(()))
}

/// Require a string
pub fn string() -> Rule {
    Rule::new("string", |value| expect_str("string", value).map(|_| ()))
}

/// Require a number
pub fn number() -> Rule {
    Rule::new("number", |value| expect_f64("number", value).map(|_| ()))
}

/// Require a boolean
pub fn boolean() -> Rule {
    Rule::new("boolean", |value| {
        if value.is_boolean() {
            Ok(())
        } else {
            Err(Violation::new("boolean", "a boolean", describe(value)))
        }
    })
}

/// Require a whole number
pub fn integer() -> Rule {
    Rule::new("integer", |value| {
        if value.is_i64() || value.is_u64() {
            return Ok(());
        }
        match value.as_f64() {
            Some(n) if n.fract() == 0.0 => Ok(()),
            _ => Err(Violation::new("integer", "a whole number", describe(value))),
        }
    })
}

/// Require a string with at least `min` characters
pub fn min_length(min: usize) -> Rule {
    Rule::new("min_length", move |value| {
        let s = expect_str("min_length", value)?;
        if s.chars().count() >= min {
            Ok(())
        } else {
            Err(Violation::new(
                "min_length",
                format!("at least {} characters", min),
                describe(value),
            ))
        }
    })
}

/// Require a string with at most `max` characters
pub fn max_length(max: usize) -> Rule {
    Rule::new("max_length", move |value| {
        let s = expect_str("max_length", value)?;
        if s.chars().count() <= max {
            Ok(())
        } else {
            Err(Violation::new(
                "max_length",
                format!("at most {} characters", max),
                describe(value),
            ))
        }
    })
}

/// Require a non-empty string
pub fn non_empty() -> Rule {
    min_length(1)
}

/// Require a number greater than or equal to `min`
pub fn min(min: f64) -> Rule {
    Rule::new("min", move |value| {
        let n = expect_f64("min", value)?;
        if n >= min {
            Ok(())
        } else {
            Err(Violation::new("min", format!("a number >= {}", min), describe(value)))
        }
    })
}

/// Require a number less than or equal to `max`
pub fn max(max: f64) -> Rule {
    Rule::new("max", move |value| {
        let n = expect_f64("max", value)?;
        if n <= max {
            Ok(())
        } else {
            Err(Violation::new("max", format!("a number <= {}", max), describe(value)))
        }
    })
}

/// Require a number within `[low, high]`
pub fn range(low: f64, high: f64) -> Rule {
    Rule::new("range", move |value| {
        let n = expect_f64("range", value)?;
        if (low..=high).contains(&n) {
            Ok(())
        } else {
            Err(Violation::new(
                "range",
                format!("a number between {} and {}", low, high),
                describe(value),
            ))
        }
    })
}

/// Require an email-shaped string
pub fn email() -> Rule {
    Rule::new("email", |value| {
        let s = expect_str("email", value)?;
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
        });
        if regex.is_match(s) {
            Ok(())
        } else {
            Err(Violation::new("email", "an email address", describe(value)))
        }
    })
}

/// Require a hyphenated UUID string
pub fn uuid() -> Rule {
    Rule::new("uuid", |value| {
        let s = expect_str("uuid", value)?;
        let regex = UUID_REGEX.get_or_init(|| {
            Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
                .unwrap()
        });
        if regex.is_match(s) {
            Ok(())
        } else {
            Err(Violation::new("uuid", "a UUID", describe(value)))
        }
    })
}

/// Require a string matching `pattern`
pub fn pattern(pattern: &str) -> Result<Rule, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(Rule::new("pattern", move |value| {
        let s = expect_str("pattern", value)?;
        if regex.is_match(s) {
            Ok(())
        } else {
            Err(Violation::new(
                "pattern",
                format!("a string matching /{}/", regex.as_str()),
                describe(value),
            ))
        }
    }))
}

/// Require a string that is one of `allowed`
pub fn one_of(allowed: &[&str]) -> Rule {
    let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
    Rule::new("one_of", move |value| {
        let s = expect_str("one_of", value)?;
        if allowed.iter().any(|candidate| candidate == s) {
            Ok(())
        } else {
            Err(Violation::new(
                "one_of",
                format!("one of: {}", allowed.join(", ")),
                describe(value),
            ))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_min_length() {
        let rule = min_length(1);
        assert!(rule.validate(&json!("Alice")).is_ok());

        let violation = rule.validate(&json!("")).unwrap_err();
        assert_eq!(violation.rule, "min_length");
        assert_eq!(violation.actual, "string \"\"");

        let violation = rule.validate(&json!(42)).unwrap_err();
        assert_eq!(violation.expected, "a string");
    }

    #[test]
    fn test_min_counts_boundary_as_valid() {
        let rule = min(0.0);
        assert!(rule.validate(&json!(0)).is_ok());
        assert!(rule.validate(&json!(25)).is_ok());
        let violation = rule.validate(&json!(-5)).unwrap_err();
        assert_eq!(violation.to_string(), "Rule 'min' violated: expected a number >= 0, but found number -5");
    }

    #[test]
    fn test_email() {
        let rule = email();
        assert!(rule.validate(&json!("alice@example.com")).is_ok());
        assert!(rule.validate(&json!("invalid-email")).is_err());
        assert!(rule.validate(&json!("a b@example.com")).is_err());
        assert!(rule.validate(&json!(null)).is_err());
    }

    #[test]
    fn test_uuid() {
        let rule = uuid();
        assert!(rule.validate(&json!("123e4567-e89b-12d3-a456-426614174000")).is_ok());
        assert!(rule.validate(&json!("123E4567-E89B-12D3-A456-426614174000")).is_ok());
        assert!(rule.validate(&json!("123e4567e89b12d3a456426614174000")).is_err());
    }

    #[test]
    fn test_integer_and_range() {
        assert!(integer().validate(&json!(3)).is_ok());
        assert!(integer().validate(&json!(3.0)).is_ok());
        assert!(integer().validate(&json!(3.5)).is_err());
        assert!(range(1.0, 10.0).validate(&json!(10)).is_ok());
        assert!(range(1.0, 10.0).validate(&json!(11)).is_err());
    }

    #[test]
    fn test_pattern_rejects_bad_regex() {
        assert!(pattern("(").is_err());
        let rule = pattern("^[a-z]+$").unwrap();
        assert!(rule.validate(&json!("abc")).is_ok());
        assert!(rule.validate(&json!("ABC")).is_err());
    }

    #[test]
    fn test_one_of() {
        let rule = one_of(&["admin", "member"]);
        assert!(rule.validate(&json!("admin")).is_ok());
        let violation = rule.validate(&json!("guest")).unwrap_err();
        assert_eq!(violation.expected, "one of: admin, member");
    }

    #[test]
    fn test_and_stops_at_first_failure() {
        let rule = string().and(max_length(3));
        assert!(rule.validate(&json!("abc")).is_ok());
        assert_eq!(rule.validate(&json!(1)).unwrap_err().rule, "string");
        assert_eq!(rule.validate(&json!("abcd")).unwrap_err().rule, "max_length");
        assert_eq!(rule.name(), "string");
    }

    #[test]
    fn test_boolean_and_any() {
        assert!(boolean().validate(&json!(true)).is_ok());
        assert!(boolean().validate(&json!("true")).is_err());
        assert!(any().validate(&json!({"nested": [1, 2]})).is_ok());
    }
}
