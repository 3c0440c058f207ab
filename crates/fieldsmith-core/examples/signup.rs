//! Drive a derived builder in both validation modes
//!
//! Run with `cargo run -p fieldsmith-core --example signup`, optionally with
//! `FIELDSMITH_MODE=permissive` to see warnings instead of failures.

use fieldsmith_core::schema::validators;
use fieldsmith_core::{SchemaBuilder, ValidationMode, ValidationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, SchemaBuilder, Serialize, Deserialize)]
struct Signup {
    #[field(validate = validators::min_length(3))]
    username: String,
    #[field(validate = validators::email())]
    email: String,
    #[field(validate = validators::range(13.0, 120.0))]
    age: u8,
    #[field(validate = validators::one_of(&["free", "pro"]))]
    plan: Option<String>,
}

fn main() -> ValidationResult<()> {
    let mode = ValidationMode::from_env();
    println!("mode: {}", mode);

    let mut builder = Signup::builder_with_mode(mode);
    builder
        .set_username("ferris")?
        .set_email("ferris@example.com")?
        .set_age(30u8)?;

    // Repeating a value is answered from the cache
    builder.set_age(30u8)?;
    println!("cache: {:?}", builder.cache().stats());

    let plan = builder.set_plan("enterprise").map(|_| ());
    match plan {
        Ok(_) => println!("warnings: {:?}", builder.diagnostics()),
        Err(e) => println!("rejected: {}", e),
    }

    let signup = builder.build()?;
    println!("{:#?}", signup);
    Ok(())
}
