//! Types shared by the builder engine
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use fieldsmith_schema::Violation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Outcome recorded for the last value tried on a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "violation", rename_all = "snake_case")]
pub enum CacheOutcome {
    /// The validator accepted the value
    Valid,
    /// The validator rejected the value
    Invalid(Violation),
}

impl CacheOutcome {
    /// Whether the value was accepted
    pub fn is_valid(&self) -> bool {
        matches!(self, CacheOutcome::Valid)
    }

    /// Recorded error message, for rejected values
    pub fn message(&self) -> Option<String> {
        match self {
            CacheOutcome::Valid => None,
            CacheOutcome::Invalid(violation) => Some(violation.to_string()),
        }
    }
}

/// Memo record for one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Most recent value passed to the field's setter
    pub last_value: Value,
    /// What the validator said about `last_value`
    pub outcome: CacheOutcome,
}

/// Counters describing how the cache has been used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of fields with an entry
    pub entries: usize,
    /// Setter calls answered from the cache
    pub hits: u64,
    /// Setter calls that invoked the validator
    pub misses: u64,
}

/// Non-fatal validation warning recorded in permissive mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Field whose value was rejected
    pub field: String,
    /// Why the value was rejected
    pub violation: Violation,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation warning for {}: {}", self.field, self.violation)
    }
}
