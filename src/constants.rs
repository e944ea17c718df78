//! Application constants for the input utilities
//!
//! Header labels, fixed column offsets and default values shared by the
//! table reader, the field parsers and the CLI.

// =============================================================================
// Header Labels
// =============================================================================

/// Header label of the lift force column
pub const LIFT_LABEL: &str = "Lift N";

/// Header label of the S column
pub const S_LABEL: &str = "S";

/// Header label of the Reynolds number column
pub const RE_LABEL: &str = "Re";

/// Labels that must all be present in the header line, in reporting order
pub const REQUIRED_LABELS: &[&str] = &[LIFT_LABEL, S_LABEL, RE_LABEL];

// =============================================================================
// Fixed Column Offsets
// =============================================================================

/// Zero-based positions used by the fixed-offset column strategy.
///
/// These do not depend on where the labels sit in the header; files produced
/// by the measurement rig always carry S, Re and lift in columns 6 to 8.
pub mod fixed_offsets {
    /// S value position
    pub const S: usize = 5;

    /// Reynolds number position
    pub const RE: usize = 6;

    /// Lift force position
    pub const LIFT: usize = 7;
}

// =============================================================================
// Defaults
// =============================================================================

/// Default field delimiter for table files
pub const DEFAULT_DELIMITER: &str = ",";

/// Separator between values in list input
pub const LIST_SEPARATOR: char = ',';

/// Field name used in validation errors when the CLI is given none
pub const DEFAULT_FIELD_NAME: &str = "input";

/// Logging target filter used when RUST_LOG is not set
pub const LOG_TARGET: &str = "recalc_input";
