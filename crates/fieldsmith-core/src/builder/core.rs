//! Core Builder structure and accessors
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use super::{Diagnostic, ValidationCache};
use crate::ValidationMode;
use fieldsmith_schema::{FieldMap, Schema};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Fluent builder bound to one schema
///
/// The builder owns the field data it has accepted so far and a validation
/// cache; the schema is shared and never mutated. All mutation goes through
/// [`set_field`](Builder::set_field), so one builder is only ever driven by a
/// single caller at a time.
///
/// ## Features
/// - Per-field validation memo: repeating a value skips the validator
/// - Strict or permissive handling of rejected values
/// - Whole-object re-validation on [`build`](Builder::build)
/// - Reusable after `build`, successful or not
pub struct Builder<S: Schema> {
    pub(super) schema: Arc<S>,
    pub(super) mode: ValidationMode,
    pub(super) data: FieldMap,
    pub(super) cache: ValidationCache,
    pub(super) diagnostics: Vec<Diagnostic>,
}

impl<S: Schema> Builder<S> {
    /// Create a strict builder for a shared schema
    pub fn new(schema: Arc<S>) -> Self {
        Self::with_mode(schema, ValidationMode::Strict)
    }

    /// Create a builder with an explicit validation mode
    pub fn with_mode(schema: Arc<S>, mode: ValidationMode) -> Self {
        Self {
            schema,
            mode,
            data: FieldMap::new(),
            cache: ValidationCache::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Create a strict builder that takes ownership of a schema
    pub fn from_schema(schema: S) -> Self {
        Self::new(Arc::new(schema))
    }

    /// The schema this builder is bound to
    pub fn schema(&self) -> &Arc<S> {
        &self.schema
    }

    /// The validation mode
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Field values accepted so far
    pub fn data(&self) -> &FieldMap {
        &self.data
    }

    /// Accepted value of one field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// Whether a field has an accepted value
    pub fn is_set(&self, field: &str) -> bool {
        self.data.contains_key(field)
    }

    /// The validation cache
    pub fn cache(&self) -> &ValidationCache {
        &self.cache
    }

    /// Warnings recorded for values rejected in permissive mode, oldest first
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Forget all accepted values, cached outcomes and diagnostics
    pub fn reset(&mut self) -> &mut Self {
        self.data.clear();
        self.cache.clear();
        self.diagnostics.clear();
        self
    }
}

impl<S: Schema> Clone for Builder<S> {
    fn clone(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            mode: self.mode,
            data: self.data.clone(),
            cache: self.cache.clone(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

impl<S: Schema> fmt::Debug for Builder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("fields", &self.schema.field_names())
            .field("mode", &self.mode)
            .field("data", &self.data)
            .field("cache", &self.cache)
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}
