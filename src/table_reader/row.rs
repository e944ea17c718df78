//! Classification of individual data rows

use super::header::HeaderColumns;
use crate::constants::{LIFT_LABEL, RE_LABEL, S_LABEL};
use crate::input_parser::parse_scalar;

/// What a single data row contributes to the result
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// S and Re parsed; `lift` is the row's lift value if it parsed too
    Accepted { s: f64, re: f64, lift: Option<f64> },
    /// S or Re is not a number
    Skipped { column: &'static str },
    /// Row is too short to hold every column; reading stops here
    Truncated { fields: usize },
}

/// Classify one data row against the active columns
pub fn classify_row(line: &str, delimiter: &str, columns: &HeaderColumns) -> RowOutcome {
    let fields: Vec<&str> = line.split(delimiter).collect();
    if fields.len() < columns.required_width() {
        return RowOutcome::Truncated {
            fields: fields.len(),
        };
    }

    let Ok(s) = parse_scalar(fields[columns.s], S_LABEL) else {
        return RowOutcome::Skipped { column: S_LABEL };
    };
    let Ok(re) = parse_scalar(fields[columns.re], RE_LABEL) else {
        return RowOutcome::Skipped { column: RE_LABEL };
    };
    let lift = parse_scalar(fields[columns.lift], LIFT_LABEL).ok();

    RowOutcome::Accepted { s, re, lift }
}
