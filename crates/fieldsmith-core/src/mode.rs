//! Validation mode selecting how a builder reacts to an invalid field value
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Environment variable consulted by [`ValidationMode::from_env`]
pub const MODE_ENV_VAR: &str = "FIELDSMITH_MODE";

/// How a builder treats a field value its validator rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Fail the setter call (production behaviour)
    #[default]
    Strict,
    /// Log a warning, keep the previous value and continue (development)
    Permissive,
}

/// Error returned when a mode name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation mode '{0}' (expected 'strict' or 'permissive')")]
pub struct ParseModeError(pub String);

impl ValidationMode {
    /// Mode requested by the process environment, defaulting to `Strict`
    pub fn from_env() -> Self {
        Self::env_override().unwrap_or_default()
    }

    /// Mode requested by [`MODE_ENV_VAR`], if it is set to a known value
    pub fn env_override() -> Option<Self> {
        Self::from_env_var(MODE_ENV_VAR)
    }

    /// Mode requested by an arbitrary environment variable
    ///
    /// An unrecognised value is logged and ignored.
    pub fn from_env_var(name: &str) -> Option<Self> {
        let raw = std::env::var(name).ok()?;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                warn!(variable = name, error = %e, "Ignoring invalid validation mode");
                None
            }
        }
    }

    /// Whether invalid values fail the setter
    pub fn is_strict(self) -> bool {
        self == ValidationMode::Strict
    }

    /// Lowercase name of the mode
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationMode::Strict => "strict",
            ValidationMode::Permissive => "permissive",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "production" | "prod" => Ok(ValidationMode::Strict),
            "permissive" | "development" | "dev" => Ok(ValidationMode::Permissive),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ValidationMode::default(), ValidationMode::Strict);
        assert!(ValidationMode::default().is_strict());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("strict".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
        assert_eq!(" Production ".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
        assert_eq!("development".parse::<ValidationMode>().unwrap(), ValidationMode::Permissive);
        assert_eq!("DEV".parse::<ValidationMode>().unwrap(), ValidationMode::Permissive);
        assert!("loose".parse::<ValidationMode>().is_err());
    }

    #[test]
    fn test_from_env_var() {
        std::env::set_var("FIELDSMITH_MODE_TEST_SET", "permissive");
        assert_eq!(
            ValidationMode::from_env_var("FIELDSMITH_MODE_TEST_SET"),
            Some(ValidationMode::Permissive)
        );

        std::env::set_var("FIELDSMITH_MODE_TEST_BAD", "sometimes");
        assert_eq!(ValidationMode::from_env_var("FIELDSMITH_MODE_TEST_BAD"), None);

        assert_eq!(ValidationMode::from_env_var("FIELDSMITH_MODE_TEST_UNSET"), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ValidationMode::Permissive).unwrap();
        assert_eq!(json, "\"permissive\"");
        let mode: ValidationMode = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(mode, ValidationMode::Strict);
    }
}
