//! Build operations for Builder
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use super::Builder;
use fieldsmith_schema::{Schema, ValidationResult};
use tracing::debug;

impl<S: Schema> Builder<S> {
    /// Validate everything accumulated so far and produce the typed object
    ///
    /// The cache is not consulted: the schema re-checks every field, so
    /// missing required fields and values dropped in permissive mode are
    /// caught here. Failures are returned in every mode. The builder stays
    /// usable afterwards.
    pub fn build(&self) -> ValidationResult<S::Output> {
        match self.schema.parse_whole(&self.data) {
            Ok(output) => {
                debug!(fields = self.data.len(), "Build succeeded");
                Ok(output)
            }
            Err(error) => {
                debug!(error = %error, "Build failed");
                Err(error)
            }
        }
    }

    /// Required fields that have no accepted value yet, in schema order
    pub fn missing_fields(&self) -> Vec<&str> {
        self.schema
            .field_names()
            .into_iter()
            .filter(|field| self.schema.is_required(field) && !self.data.contains_key(*field))
            .collect()
    }

    /// Whether every required field has an accepted value
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
