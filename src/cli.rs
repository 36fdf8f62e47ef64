use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Printed on stdout whenever the arguments cannot be parsed.
pub const USAGE: &str = concat!("Usage: ", env!("CARGO_PKG_NAME"), " <file.yml>");

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "yaml-guard")]
#[command(author, version, about = "Basic YAML syntax checker for Docker Compose files")]
#[command(long_about = "Scans a YAML file line by line for tabs, missing spaces after \
    key colons and unmatched quotes.\n\n\
    Exit codes:\n  \
    0 - No issues found\n  \
    1 - Issues found, file unreadable, or bad arguments\n  \
    2 - Configuration or output error")]
pub struct Cli {
    /// YAML file to check
    #[arg(value_name = "FILE.YML", allow_hyphen_values = true)]
    pub file: PathBuf,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the report on stdout (exit code is unchanged)
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Output format [possible values: text, json, sarif]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse failures caused by a missing or surplus positional argument.
#[must_use]
pub const fn is_arity_error(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues
    )
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
