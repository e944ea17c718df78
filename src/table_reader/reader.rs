//! Input table reading
//!
//! Opens the file, validates the header and walks the data rows once,
//! collecting S/Re pairs and the first lift value.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use super::header::HeaderColumns;
use super::row::{RowOutcome, classify_row};
use crate::config::ReaderConfig;
use crate::error::{InputError, Result};
use crate::models::{InputData, ReadStats, TableRead};

/// Read S, Re and lift values from a delimited table
///
/// Uses the fixed column offsets and no per-row diagnostics. See
/// [`read_input_table_with`] for the configurable form.
pub fn read_input_table(path: impl AsRef<Path>, delimiter: &str) -> Result<InputData> {
    let config = ReaderConfig::new(delimiter);
    read_input_table_with(path, &config).map(|read| read.data)
}

/// Read an input table with explicit configuration, returning row statistics
pub fn read_input_table_with(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<TableRead> {
    let path = path.as_ref();
    config.validate()?;

    info!("Reading input table: {}", path.display());

    let file = File::open(path).map_err(|e| InputError::io(path, e))?;
    let mut lines = BufReader::new(file).split(b'\n');

    let header_line = match lines.next() {
        Some(bytes) => decode_line(bytes.map_err(|e| InputError::io(path, e))?),
        None => String::new(),
    };
    let header = HeaderColumns::locate(&header_line, &config.delimiter)
        .ok_or_else(|| InputError::format(path))?;
    let columns = header.for_strategy(config.columns);

    debug!(
        "Header columns: lift={}, S={}, Re={}; reading rows from lift={}, S={}, Re={}",
        header.lift, header.s, header.re, columns.lift, columns.s, columns.re
    );

    let mut s_values = Vec::new();
    let mut re_values = Vec::new();
    let mut lift = None;
    let mut stats = ReadStats::new();

    // Header is line 1
    for (line_number, bytes) in (2..).zip(lines) {
        let line = decode_line(bytes.map_err(|e| InputError::io(path, e))?);
        stats.data_lines += 1;

        match classify_row(&line, &config.delimiter, &columns) {
            RowOutcome::Accepted {
                s,
                re,
                lift: row_lift,
            } => {
                s_values.push(s);
                re_values.push(re);
                stats.rows_accepted += 1;

                if lift.is_none() {
                    if let Some(value) = row_lift {
                        lift = Some(value);
                        if config.debug {
                            debug!("L: {} (line {})", value, line_number);
                        }
                    }
                }
                if config.debug {
                    debug!("S: {}, Re: {}", s, re);
                }
            }
            RowOutcome::Skipped { column } => {
                stats.rows_skipped += 1;
                if config.debug {
                    debug!(
                        "Skipping line {} due to invalid {} value: {}",
                        line_number, column, line
                    );
                }
            }
            RowOutcome::Truncated { fields } => {
                stats.stopped_at_line = Some(line_number);
                if config.debug {
                    debug!(
                        "Stopping at line {}: {} fields, {} required",
                        line_number,
                        fields,
                        columns.required_width()
                    );
                }
                break;
            }
        }
    }

    stats.lift_captured = lift.is_some();

    debug!(
        "Read {} rows from {} ({} skipped, stopped at {:?})",
        stats.rows_accepted,
        path.display(),
        stats.rows_skipped,
        stats.stopped_at_line
    );

    Ok(TableRead {
        data: InputData::new(lift.unwrap_or(0.0), s_values, re_values),
        stats,
    })
}

/// Decode one raw line, replacing invalid UTF-8 and dropping a trailing `\r`
fn decode_line(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
