//! Command-line argument definitions
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::{ColumnStrategy, ReaderConfig};
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_FIELD_NAME};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Reynolds input utilities
#[derive(Debug, Clone, Parser)]
#[command(
    name = "recalc-input",
    version,
    about = "Read lift/S/Re tables and parse numeric input for Reynolds number calculations"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Read S, Re and lift values from a delimited table
    Read(ReadArgs),
    /// Parse a number or comma-separated list of numbers
    Parse(ParseArgs),
}

/// Arguments for the read command
#[derive(Debug, Clone, Parser)]
pub struct ReadArgs {
    /// Table file with a header naming the Lift N, S and Re columns
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIM",
        default_value = DEFAULT_DELIMITER,
        help = "Field delimiter (literal string)"
    )]
    pub delimiter: String,

    /// Where data values are read from
    ///
    /// `fixed` reads S, Re and lift from columns 6, 7 and 8 whatever the
    /// header says. `header` uses the positions of the labels.
    #[arg(
        long = "columns",
        value_enum,
        default_value = "fixed",
        help = "Column lookup for data rows"
    )]
    pub columns: ColumnMode,

    /// Log every parsed and skipped row
    #[arg(long = "debug", help = "Log per-row diagnostics (shown with -vv)")]
    pub debug: bool,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

impl ReadArgs {
    /// Build the reader configuration for these arguments
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig::new(self.delimiter.clone())
            .with_columns(self.columns.into())
            .with_debug(self.debug)
    }
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Value or comma-separated list to parse
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: String,

    /// Field name reported in validation errors
    #[arg(
        short = 'f',
        long = "field",
        value_name = "NAME",
        default_value = DEFAULT_FIELD_NAME
    )]
    pub field: String,

    /// Treat the input as a single value instead of a list
    #[arg(long = "scalar")]
    pub scalar: bool,

    /// Output format for parsed values
    ///
    /// `NaN` and infinite values have no JSON form and are written as `null`.
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results (non-finite values are null in JSON)"
    )]
    pub output_format: OutputFormat,
}

/// Column lookup mode as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnMode {
    /// Fixed positions 5, 6 and 7
    Fixed,
    /// Label positions from the header
    Header,
}

impl From<ColumnMode> for ColumnStrategy {
    fn from(mode: ColumnMode) -> Self {
        match mode {
            ColumnMode::Fixed => ColumnStrategy::FixedOffsets,
            ColumnMode::Header => ColumnStrategy::Header,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_defaults() {
        let args = Args::try_parse_from(["recalc-input", "read", "run.csv"]).unwrap();

        let Commands::Read(read) = args.command else {
            panic!("expected read command");
        };
        assert_eq!(read.file, PathBuf::from("run.csv"));
        assert_eq!(read.delimiter, ",");
        assert_eq!(read.columns, ColumnMode::Fixed);
        assert!(!read.debug);
        assert_eq!(read.output_format, OutputFormat::Human);
        assert_eq!(read.reader_config(), ReaderConfig::default());
    }

    #[test]
    fn test_read_options() {
        let args = Args::try_parse_from([
            "recalc-input",
            "-vv",
            "read",
            "run.csv",
            "-d",
            ";",
            "--columns",
            "header",
            "--debug",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.get_log_level(), "debug");
        let Commands::Read(read) = args.command else {
            panic!("expected read command");
        };
        let config = read.reader_config();
        assert_eq!(config.delimiter, ";");
        assert_eq!(config.columns, ColumnStrategy::Header);
        assert!(config.debug);
        assert_eq!(read.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "recalc-input",
            "parse",
            "-1.5",
            "--field",
            "velocity",
            "--scalar",
        ])
        .unwrap();

        let Commands::Parse(parse) = args.command else {
            panic!("expected parse command");
        };
        assert_eq!(parse.input, "-1.5");
        assert_eq!(parse.field, "velocity");
        assert!(parse.scalar);
    }

    #[test]
    fn test_log_levels() {
        let quiet = Args::try_parse_from(["recalc-input", "-q", "parse", "1"]).unwrap();
        assert_eq!(quiet.get_log_level(), "error");

        let default = Args::try_parse_from(["recalc-input", "parse", "1"]).unwrap();
        assert_eq!(default.get_log_level(), "warn");

        assert!(Args::try_parse_from(["recalc-input", "-q", "-v", "parse", "1"]).is_err());
    }
}
