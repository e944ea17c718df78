//! Core data structures returned by the table reader.

use serde::{Deserialize, Serialize};

/// Values extracted from an input table
///
/// `s` and `re` always have the same length, one entry per accepted row,
/// in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputData {
    /// Lift force from the first row where it parsed, 0.0 if none did
    pub lift: f64,
    pub s: Vec<f64>,
    pub re: Vec<f64>,
}

impl InputData {
    pub fn new(lift: f64, s: Vec<f64>, re: Vec<f64>) -> Self {
        debug_assert_eq!(s.len(), re.len());
        Self { lift, s, re }
    }

    /// Number of accepted rows
    pub fn len(&self) -> usize {
        self.s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Iterate over `(S, Re)` pairs in row order
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.s.iter().copied().zip(self.re.iter().copied())
    }
}

/// Row counters for a single table read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadStats {
    /// Data lines examined, including the one that stopped the read
    pub data_lines: usize,

    /// Rows whose S and Re values were kept
    pub rows_accepted: usize,

    /// Rows dropped because S or Re was not a number
    pub rows_skipped: usize,

    /// 1-based file line of the short row that ended the read
    pub stopped_at_line: Option<usize>,

    /// Whether a lift value was found
    pub lift_captured: bool,
}

impl ReadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted rows as a percentage of the rows that had enough fields
    pub fn success_rate(&self) -> f64 {
        let considered = self.rows_accepted + self.rows_skipped;
        if considered == 0 {
            0.0
        } else {
            (self.rows_accepted as f64 / considered as f64) * 100.0
        }
    }

    /// True when the read ended at a short row rather than end of file
    pub fn was_truncated(&self) -> bool {
        self.stopped_at_line.is_some()
    }
}

/// Extracted data together with the counters describing how it was read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRead {
    pub data: InputData,
    pub stats: ReadStats,
}
