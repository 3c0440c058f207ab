//! Command-line interface argument parsing and definitions
//!
//! The CLI structure uses clap's derive API.
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use clap::{Parser, Subcommand, ValueEnum};
use fieldsmith_core::ValidationMode;
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Fieldsmith CLI - drive schema-validated fluent builders from the shell
///
/// Builds the example `User` record from flags or from a JSON/YAML file,
/// reporting validation failures the way the builder sees them.
#[derive(Parser, Debug)]
#[command(
    name = "fieldsmith",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FIELDSMITH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a user record from command-line values
    User(UserArgs),

    /// Feed a JSON or YAML object through the user builder
    Check(CheckArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the user command
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// User id (a fresh UUID when omitted)
    #[arg(long)]
    pub id: Option<String>,

    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Validation mode (overrides FIELDSMITH_MODE and the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to a JSON or YAML file holding one object
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Validation mode (overrides FIELDSMITH_MODE and the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Validation mode as accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Fail the setter on an invalid value
    #[value(alias = "production", alias = "prod")]
    Strict,
    /// Log a warning for an invalid value and keep going
    #[value(alias = "development", alias = "dev")]
    Permissive,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<ModeArg> for ValidationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Strict => ValidationMode::Strict,
            ModeArg::Permissive => ValidationMode::Permissive,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["fieldsmith", "-vv", "check", "user.json"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli { quiet: true, ..cli };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_user_args_accept_negative_age() {
        let cli = Cli::parse_from(["fieldsmith", "user", "--name", "Bob", "--age", "-5"]);
        match cli.command {
            Commands::User(args) => {
                assert_eq!(args.age, Some(-5));
                assert_eq!(args.name.as_deref(), Some("Bob"));
                assert!(args.mode.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_mode_aliases() {
        let cli = Cli::parse_from(["fieldsmith", "check", "user.yaml", "--mode", "dev"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.mode, Some(ModeArg::Permissive));
                assert_eq!(
                    ValidationMode::from(ModeArg::Permissive),
                    ValidationMode::Permissive
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
