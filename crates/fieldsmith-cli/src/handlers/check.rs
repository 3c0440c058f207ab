//! Check command handler
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use super::report;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use crate::records::{User, UserBuilder};
use fieldsmith_core::{FieldMap, ValidationResult};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Handle the check command
pub fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("check");
    let fields = load_object(&args.file)?;
    let mode = config.resolve_mode(args.mode.map(Into::into));
    info!(
        file = %args.file.display(),
        fields = fields.len(),
        mode = %mode,
        "Checking record"
    );

    let mut builder = User::builder_with_mode(mode);
    let result = apply(&mut builder, fields).and_then(|builder| builder.build());
    report(result, &builder, config, output)
}

fn apply(builder: &mut UserBuilder, fields: FieldMap) -> ValidationResult<&mut UserBuilder> {
    for (key, value) in fields {
        debug!(field = %key, "Setting field");
        builder.set_field(&key, value)?;
    }
    Ok(builder)
}

/// Read a JSON or YAML file holding a single object
pub(crate) fn load_object(path: &Path) -> Result<FieldMap> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if path.is_dir() {
        return Err(Error::invalid_args(format!(
            "{} is a directory, expected a file",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let value: Value = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => {
            return Err(Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "JSON or YAML (.json, .yaml, .yml)".to_string(),
            })
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "a single object".to_string(),
        }),
    }
}
