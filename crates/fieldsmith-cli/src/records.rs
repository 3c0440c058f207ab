//! Example record driven by the CLI
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use fieldsmith_core::schema::validators;
use fieldsmith_core::SchemaBuilder;
use serde::{Deserialize, Serialize};

/// A user account
#[derive(Debug, Clone, PartialEq, SchemaBuilder, Serialize, Deserialize)]
#[schema(name = "user")]
pub struct User {
    #[field(validate = validators::uuid())]
    pub id: String,
    #[field(validate = validators::non_empty().and(validators::max_length(64)))]
    pub name: String,
    #[field(validate = validators::integer().and(validators::range(0.0, 150.0)))]
    pub age: i64,
    #[field(validate = validators::email())]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsmith_core::ValidationMode;

    const ID: &str = "5f0c3a0e-8d4b-4c1e-9a57-2f6d1b3e4a90";

    #[test]
    fn test_build_user() {
        let user = User::builder()
            .set_id(ID)
            .and_then(|b| b.set_name("Alice"))
            .and_then(|b| b.set_age(25))
            .and_then(|b| b.set_email("alice@example.com"))
            .and_then(|b| b.build())
            .unwrap();

        assert_eq!(user.name, "Alice");
        assert_eq!(user.age, 25);
    }

    #[test]
    fn test_rejects_out_of_range_age() {
        let mut builder = User::builder();
        let error = builder.set_age(-5).unwrap_err();
        assert_eq!(error.violations[0].rule, "range");

        let error = builder.set_age(200).unwrap_err();
        assert_eq!(error.field_name(), Some("age"));
    }

    #[test]
    fn test_rejects_malformed_id_permissively() {
        let mut builder = User::builder_with_mode(ValidationMode::Permissive);
        builder.set_id("not-a-uuid").unwrap();

        assert_eq!(builder.diagnostics()[0].violation.rule, "uuid");
        assert!(!builder.is_set("id"));
    }
}
