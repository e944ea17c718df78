//! Header line analysis for input tables
//!
//! Locates the lift, S and Re columns by case-insensitive label match.

use crate::config::ColumnStrategy;
use crate::constants::{LIFT_LABEL, RE_LABEL, S_LABEL, fixed_offsets};

/// Zero-based column indices of the required labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderColumns {
    pub lift: usize,
    pub s: usize,
    pub re: usize,
}

impl HeaderColumns {
    /// The fixed positions used regardless of the header layout
    pub const FIXED: HeaderColumns = HeaderColumns {
        lift: fixed_offsets::LIFT,
        s: fixed_offsets::S,
        re: fixed_offsets::RE,
    };

    /// Find the required labels in a header line
    ///
    /// Cells are trimmed before comparison. Returns `None` when any label is
    /// missing; a label present more than once resolves to its last position.
    pub fn locate(header_line: &str, delimiter: &str) -> Option<Self> {
        let mut lift = None;
        let mut s = None;
        let mut re = None;

        for (index, cell) in header_line.split(delimiter).enumerate() {
            let label = cell.trim();
            if label.eq_ignore_ascii_case(LIFT_LABEL) {
                lift = Some(index);
            } else if label.eq_ignore_ascii_case(S_LABEL) {
                s = Some(index);
            } else if label.eq_ignore_ascii_case(RE_LABEL) {
                re = Some(index);
            }
        }

        Some(Self {
            lift: lift?,
            s: s?,
            re: re?,
        })
    }

    /// Columns data rows are read from under the given strategy
    pub fn for_strategy(self, strategy: ColumnStrategy) -> Self {
        match strategy {
            ColumnStrategy::FixedOffsets => Self::FIXED,
            ColumnStrategy::Header => self,
        }
    }

    /// Minimum number of fields a row needs to hold all three columns
    pub fn required_width(&self) -> usize {
        self.lift.max(self.s).max(self.re) + 1
    }
}
