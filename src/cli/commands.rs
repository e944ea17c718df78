//! Command implementations for the CLI
//!
//! Dispatches parsed arguments to the library and renders results.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

use super::args::{Args, Commands, OutputFormat, ParseArgs, ReadArgs};
use crate::constants::LOG_TARGET;
use crate::input_parser::{parse_scalar, parse_vector};
use crate::models::TableRead;
use crate::table_reader::read_input_table_with;

/// Run the selected command
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    match &args.command {
        Commands::Read(read_args) => run_read(read_args),
        Commands::Parse(parse_args) => run_parse(parse_args),
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // Keep any subscriber that is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

fn run_read(args: &ReadArgs) -> Result<()> {
    let config = args.reader_config();
    let read = read_input_table_with(&args.file, &config)
        .with_context(|| format!("Failed to read input table {}", args.file.display()))?;

    info!(
        "Read {} rows from {}",
        read.stats.rows_accepted,
        args.file.display()
    );

    let mut out = std::io::stdout().lock();
    match args.output_format {
        OutputFormat::Json => write_json(&mut out, &read),
        OutputFormat::Human => write_table(&mut out, &read),
    }
}

fn run_parse(args: &ParseArgs) -> Result<()> {
    write_parsed(&mut std::io::stdout().lock(), args)
}

/// Parse the command's input and write the values
///
/// JSON has no representation for `NaN` or infinities; such values are
/// written as `null`. Human output prints them as `NaN`, `inf` and `-inf`.
fn write_parsed(out: &mut impl Write, args: &ParseArgs) -> Result<()> {
    let values = if args.scalar {
        vec![parse_scalar(&args.input, &args.field)?]
    } else {
        parse_vector(&args.input, &args.field)?
    };

    match args.output_format {
        OutputFormat::Json if args.scalar => write_json(out, &values[0]),
        OutputFormat::Json => write_json(out, &values),
        OutputFormat::Human => {
            for value in &values {
                writeln!(out, "{}", value)?;
            }
            Ok(())
        }
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn write_table(out: &mut impl Write, read: &TableRead) -> Result<()> {
    let data = &read.data;
    let stats = &read.stats;

    let lift = if stats.lift_captured {
        format!("{}", data.lift).green()
    } else {
        format!("{} (not found)", data.lift).yellow()
    };
    writeln!(out, "{} {}", "Lift N:".bold(), lift)?;
    writeln!(out, "{} {}", "Rows:".bold(), data.len())?;
    writeln!(out)?;

    writeln!(out, "{:>6}  {:>14}  {:>14}", "#", "S", "Re")?;
    for (index, (s, re)) in data.pairs().enumerate() {
        writeln!(out, "{:>6}  {:>14}  {:>14}", index + 1, s, re)?;
    }
    writeln!(out)?;

    if stats.rows_skipped > 0 {
        writeln!(
            out,
            "{}",
            format!("Skipped {} non-numeric rows", stats.rows_skipped).yellow()
        )?;
    }
    if let Some(line) = stats.stopped_at_line {
        writeln!(
            out,
            "{}",
            format!("Stopped at line {}: row too short", line).yellow()
        )?;
    }
    Ok(())
}
