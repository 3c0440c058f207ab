//! Command handlers for CLI subcommands
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

mod check;
mod completions;
mod user;

pub use check::handle_check;
pub use completions::handle_completions;
pub use user::handle_user;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use crate::records::{User, UserBuilder};
use fieldsmith_core::ValidationResult;
use tracing::info;

/// Print the outcome of driving a user builder
///
/// Permissive warnings come first, then either the record or the error. In
/// machine formats the error is also written to stdout as a structured value.
fn report(
    result: ValidationResult<User>,
    builder: &UserBuilder,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let stats = builder.cache().stats();
    info!(
        cache_hits = stats.hits,
        cache_misses = stats.misses,
        warnings = builder.diagnostics().len(),
        "Builder finished"
    );

    if config.output.show_warnings {
        output.diagnostics(builder.diagnostics())?;
    }

    match result {
        Ok(user) => {
            output.data(&user)?;
            output.success("✓ Record is valid")?;
            Ok(())
        }
        Err(error) => {
            if output.format() != OutputFormat::Human {
                output.validation_error(&error)?;
            }
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod tests;
