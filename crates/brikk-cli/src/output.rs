//! Output rendering for CLI results
//!
//! Two formats: `pretty` for humans (colored status lines plus indented
//! JSON) and `json` for scripts (one compact document on stdout, nothing
//! else).

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::error::Result;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// Machine-readable JSON
    Json,
}

/// Writer rendering results in the selected format
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, color: bool, quiet: bool) -> Self {
        Self {
            format,
            color,
            quiet,
        }
    }

    /// Print an informational line (suppressed in quiet and json modes)
    pub fn info(&self, message: &str) {
        if self.quiet || self.format == OutputFormat::Json {
            return;
        }
        if self.color {
            eprintln!("{}", message.dimmed());
        } else {
            eprintln!("{}", message);
        }
    }

    /// Print a success line (suppressed in quiet and json modes)
    pub fn success(&self, message: &str) {
        if self.quiet || self.format == OutputFormat::Json {
            return;
        }
        if self.color {
            println!("{} {}", "ok".green().bold(), message);
        } else {
            println!("ok {}", message);
        }
    }

    /// Render a result value in the selected format
    pub fn value<T: Serialize>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
            OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(value)?),
        }
        Ok(())
    }
}
