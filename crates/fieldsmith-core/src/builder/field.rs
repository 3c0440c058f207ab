//! Field mutation and validation caching for Builder
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use super::{Builder, CacheOutcome, Diagnostic};
use crate::ValidationMode;
use fieldsmith_schema::{Schema, ValidationError, ValidationResult, Violation};
use serde_json::Value;
use tracing::{debug, warn};

impl<S: Schema> Builder<S> {
    /// Set one field, validating it unless the cache already knows the answer
    ///
    /// - Same value as last time and it was valid: stored without calling the
    ///   validator.
    /// - Same value as last time and it was invalid: the recorded failure is
    ///   returned again, in every mode.
    /// - New value: the validator runs and its outcome is cached. A rejected
    ///   value is never stored; in strict mode the call fails, in permissive
    ///   mode a [`Diagnostic`] is recorded, a warning is logged and the
    ///   field keeps its previous value.
    ///
    /// Unknown fields are rejected without touching any state.
    pub fn set_field(&mut self, key: &str, value: impl Into<Value>) -> ValidationResult<&mut Self> {
        let value = value.into();

        if !self.schema.has_field(key) {
            return Err(ValidationError::field(
                key,
                Violation::new(
                    "unknown_field",
                    format!("one of: {}", self.schema.field_names().join(", ")),
                    format!("field '{}'", key),
                ),
            ));
        }

        let replay = self
            .cache
            .lookup(key, &value)
            .map(|entry| entry.outcome.clone());

        match replay {
            Some(CacheOutcome::Valid) => {
                debug!(field = key, "Cache hit, value already valid");
                self.data.insert(key.to_string(), value);
                Ok(self)
            }
            Some(CacheOutcome::Invalid(violation)) => {
                debug!(field = key, "Cache hit, replaying recorded failure");
                Err(ValidationError::field(key, violation))
            }
            None => self.validate_and_store(key, value),
        }
    }

    fn validate_and_store(&mut self, key: &str, value: Value) -> ValidationResult<&mut Self> {
        match self.schema.validate_field(key, &value) {
            Ok(()) => {
                debug!(field = key, "Field validated");
                self.cache.record(key, value.clone(), CacheOutcome::Valid);
                self.data.insert(key.to_string(), value);
                Ok(self)
            }
            Err(violation) => {
                self.cache
                    .record(key, value, CacheOutcome::Invalid(violation.clone()));

                match self.mode {
                    ValidationMode::Permissive => {
                        warn!(
                            field = key,
                            mode = %self.mode,
                            "Validation warning for {}: {}",
                            key,
                            violation
                        );
                        self.diagnostics.push(Diagnostic {
                            field: key.to_string(),
                            violation,
                        });
                        Ok(self)
                    }
                    ValidationMode::Strict => {
                        debug!(field = key, "Field rejected");
                        Err(ValidationError::field(key, violation))
                    }
                }
            }
        }
    }
}
