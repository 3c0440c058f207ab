//! Fieldsmith Core - schema-driven fluent builders
//!
//! Given a schema that maps field names to validators, this crate provides a
//! [`Builder`] with one setter per field, a per-field validation cache, and a
//! terminal [`build`](Builder::build) that re-validates the whole object.
//!
//! # Main Components
//!
//! - **Builder Engine**: accumulated field data plus a validation memo, driven
//!   by [`Builder::set_field`]
//! - **Validation Modes**: [`ValidationMode::Strict`] fails a setter on an
//!   invalid value, [`ValidationMode::Permissive`] logs it and keeps going
//! - **Schemas**: re-exported from `fieldsmith-schema` as [`schema`]
//! - **Derived setters**: `#[derive(SchemaBuilder)]` generates a typed
//!   builder with one `set_<field>` method per struct field
//!
//! # Example
//!
//! ```rust
//! use fieldsmith_core::schema::{validators, ObjectSchema};
//! use fieldsmith_core::{Builder, ValidationMode};
//! use serde_json::json;
//!
//! let schema = ObjectSchema::<serde_json::Value>::new("user")
//!     .field("name", validators::non_empty())
//!     .field("age", validators::min(0.0));
//!
//! let mut builder = Builder::from_schema(schema);
//! builder.set_field("name", "Alice")?.set_field("age", 25)?;
//! assert_eq!(builder.build()?, json!({"name": "Alice", "age": 25}));
//!
//! assert!(builder.set_field("age", -5).is_err());
//! assert_eq!(builder.mode(), ValidationMode::Strict);
//! # Ok::<(), fieldsmith_core::ValidationError>(())
//! ```
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

pub mod builder;
pub mod mode;

pub use fieldsmith_schema as schema;
#[doc(hidden)]
pub use serde_json;

// Re-export main types for convenience
pub use builder::{Builder, CacheEntry, CacheOutcome, CacheStats, Diagnostic, ValidationCache};
pub use mode::{ParseModeError, ValidationMode, MODE_ENV_VAR};
pub use schema::{
    ErrorScope, FieldMap, FieldValidator, ObjectSchema, Schema, ValidationError, ValidationResult,
    Violation,
};

#[cfg(feature = "derive")]
pub use fieldsmith_derive::SchemaBuilder;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }
}
