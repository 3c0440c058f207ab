//! Fieldsmith Schema - object schemas and per-field validators
//!
//! This crate is the schema side of Fieldsmith builders. It provides:
//! - **Schema**: the adapter trait a builder talks to (per-field checks and
//!   a whole-object check producing a typed value)
//! - **ObjectSchema**: an ordered set of named fields, each with a validator
//!   and a required flag, deserializing into any `serde` type
//! - **Validators**: stock [`Rule`]s such as `min_length`, `min`, `email`
//! - **Errors**: [`ValidationError`] scoped to a field or to the whole object
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldsmith_schema::{validators, ObjectSchema, Schema};
//! use serde_json::json;
//!
//! let schema = ObjectSchema::<serde_json::Value>::new("user")
//!     .field("name", validators::non_empty())
//!     .field("email", validators::email());
//!
//! assert!(schema.validate_field("email", &json!("alice@example.com")).is_ok());
//! assert!(schema.validate_field("email", &json!("not-an-email")).is_err());
//! ```
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod schema;
pub mod validators;

// Re-export commonly used types for convenience
pub use error::{ErrorScope, ValidationError, ValidationResult, Violation};
pub use schema::{FieldMap, FieldSpec, FieldValidator, ObjectSchema, Schema};
pub use validators::Rule;
