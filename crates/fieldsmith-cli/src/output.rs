//! Output formatting and writing utilities
//!
//! Results are written in one of the [`OutputFormat`]s. Machine formats
//! serialize the value as-is; the human format renders records and
//! validation reports as aligned text.
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use fieldsmith_core::{Diagnostic, ValidationError};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::trace;

/// Formatting for values and validation reports
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation error with its violations
    fn format_validation_error(&self, error: &ValidationError) -> Result<String>;

    /// Format permissive-mode warnings
    fn format_diagnostics(&self, diagnostics: &[Diagnostic]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => format_value_human(&serde_json::to_value(value)?),
        }
    }

    fn format_validation_error(&self, error: &ValidationError) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_error_human(error)),
            _ => self.format(error),
        }
    }

    fn format_diagnostics(&self, diagnostics: &[Diagnostic]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(diagnostics
                .iter()
                .map(|diagnostic| format!("  - {}", diagnostic))
                .collect::<Vec<_>>()
                .join("\n")),
            _ => self.format(&diagnostics),
        }
    }
}

/// Render an object as `key: value` lines, anything else as pretty JSON
fn format_value_human(value: &Value) -> Result<String> {
    let Value::Object(map) = value else {
        return Ok(serde_json::to_string_pretty(value)?);
    };

    let width = map.keys().map(|key| key.len()).max().unwrap_or(0);
    let lines: Vec<String> = map
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{:width$}  {}", key, rendered, width = width)
        })
        .collect();
    Ok(lines.join("\n"))
}

fn format_validation_error_human(error: &ValidationError) -> String {
    let mut lines = vec![error.to_string()];
    for violation in &error.violations {
        match &violation.field {
            Some(field) => lines.push(format!("  - {}: {}", field, violation)),
            None => lines.push(format!("  - {}", violation)),
        }
    }
    lines.join("\n")
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a success message (human format only)
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message (human format only)
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header (human format only)
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Writing data");
        self.writeln(formatted.trim_end())
    }

    /// Write permissive-mode warnings, if there are any
    pub fn diagnostics(&mut self, diagnostics: &[Diagnostic]) -> Result<()> {
        if diagnostics.is_empty() || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.section(&format!("{} warning(s)", diagnostics.len()))?;
        let formatted = self.format.format_diagnostics(diagnostics)?;
        if self.use_color {
            self.writeln(&formatted.yellow().to_string())
        } else {
            self.writeln(&formatted)
        }
    }

    /// Write a validation error in the configured format
    pub fn validation_error(&mut self, error: &ValidationError) -> Result<()> {
        let formatted = self.format.format_validation_error(error)?;
        self.writeln(formatted.trim_end())
    }
}
