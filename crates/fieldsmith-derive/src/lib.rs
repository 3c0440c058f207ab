//! Fieldsmith derive macros
//!
//! `#[derive(SchemaBuilder)]` turns a struct with named fields into a schema
//! plus a typed fluent builder with one `set_<field>` method per field. The
//! generated code refers to `::fieldsmith_core`, so depend on that crate
//! (with its default `derive` feature) rather than on this one directly.
//!
//! # Example
//!
//! ```ignore
//! use fieldsmith_core::schema::validators;
//! use fieldsmith_core::SchemaBuilder;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(SchemaBuilder, Serialize, Deserialize)]
//! struct User {
//!     #[field(validate = validators::min_length(1))]
//!     name: String,
//!     #[field(validate = validators::min(0.0))]
//!     age: i64,
//!     nickname: Option<String>,
//! }
//!
//! let user = User::builder().set_name("Alice")?.set_age(25)?.build()?;
//! ```
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod schema_builder;

/// Derive a schema and a fluent builder for a struct
///
/// # Generated items
///
/// - `T::schema()`: the shared `ObjectSchema<T>`, built once
/// - `T::builder()` / `T::builder_with_mode(mode)`
/// - `TBuilder` with `set_<field>(impl Into<FieldType>)` for every field,
///   plus `set_field`, `build`, `reset`, `into_inner`, `Default` and
///   `Deref` to the untyped builder for introspection
///
/// # Attributes
///
/// - `#[schema(builder = "Name")]`: name of the generated builder type
/// - `#[schema(name = "name")]`: schema name used in error messages
/// - `#[field(validate = <expr>)]`: validator for the field; without it any
///   value is accepted
/// - `#[field(rename = "key")]`: schema key; keep it in line with serde's
///   rename so `build` can deserialize
///
/// `Option<T>` fields are optional and their setter takes `T`. The struct
/// must implement `Serialize` for its field types and `Deserialize`.
#[proc_macro_derive(SchemaBuilder, attributes(schema, field))]
pub fn derive_schema_builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match schema_builder::expand(input) {
        Ok(output) => output.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
