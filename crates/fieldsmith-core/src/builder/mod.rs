//! Schema-driven builder engine
//!
//! A [`Builder`] accumulates field values for one schema. Every setter call
//! goes through [`Builder::set_field`], which consults a per-field
//! [`ValidationCache`] before paying for validation, and [`Builder::build`]
//! re-validates the whole accumulated object through the schema.
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

mod types;
mod cache;
mod core;
mod field;
mod build;

// Re-export public types and builders
pub use types::{CacheEntry, CacheOutcome, CacheStats, Diagnostic};
pub use cache::ValidationCache;
pub use self::core::Builder;
