//! User command handler
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use super::report;
use crate::cli::UserArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use crate::records::{User, UserBuilder};
use fieldsmith_core::ValidationResult;
use tracing::info;
use uuid::Uuid;

/// Handle the user command
///
/// Each supplied flag goes through its typed setter; omitted flags stay
/// unset so `build` reports them.
pub fn handle_user(args: UserArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("user");
    let mode = config.resolve_mode(args.mode.map(Into::into));
    info!(mode = %mode, "Building user from arguments");

    let mut builder = User::builder_with_mode(mode);
    let result = apply(&mut builder, args).and_then(|builder| builder.build());
    report(result, &builder, config, output)
}

fn apply(builder: &mut UserBuilder, args: UserArgs) -> ValidationResult<&mut UserBuilder> {
    let id = args.id.unwrap_or_else(|| Uuid::new_v4().to_string());
    builder.set_id(id)?;

    if let Some(name) = args.name {
        builder.set_name(name)?;
    }
    if let Some(age) = args.age {
        builder.set_age(age)?;
    }
    if let Some(email) = args.email {
        builder.set_email(email)?;
    }
    Ok(builder)
}
