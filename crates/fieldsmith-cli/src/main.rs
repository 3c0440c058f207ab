//! Fieldsmith CLI - build and check schema-validated records
//!
//! Entry point for the `fieldsmith` binary. It drives the derived builder of
//! an example `User` record from flags or files, in strict or permissive
//! validation mode.
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;
mod records;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // A missing .env file is not an error
    dotenv::dotenv().ok();

    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let config = Config::load_with_file(cli.config.as_deref())?;

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let mut output = OutputWriter::new(cli.output, use_color, cli.quiet);
    execute(cli, &config, &mut output)
}

#[instrument(skip_all, fields(command = ?cli.command))]
fn execute(cli: Cli, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    tracing::info!(verbosity = cli.verbosity_level(), "Executing command");

    match cli.command {
        Commands::User(args) => handlers::handle_user(args, config, output),
        Commands::Check(args) => handlers::handle_check(args, config, output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);
    logging_config.merge_with_settings(&config.logging, verbosity)?;
    logging_config.merge_with_env();

    // Quiet mode only logs errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
