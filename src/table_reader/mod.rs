//! Reader for lift/S/Re input tables
//!
//! Input tables are plain delimited text: a header line naming the
//! `Lift N`, `S` and `Re` columns (any order, any case), followed by data
//! rows split on the same delimiter. No quoting is recognised.
//!
//! ## Architecture
//!
//! - [`header`] - label lookup and column positions
//! - [`row`] - per-row classification (accepted, skipped, truncated)
//! - [`reader`] - file handling and accumulation
//!
//! ## Usage
//!
//! ```no_run
//! use recalc_input::table_reader::read_input_table;
//!
//! # fn example() -> recalc_input::Result<()> {
//! let data = read_input_table("wing_sweep.csv", ",")?;
//! println!("L = {}, {} rows", data.lift, data.len());
//! # Ok(())
//! # }
//! ```

pub mod header;
pub mod reader;
pub mod row;

#[cfg(test)]
mod tests;

pub use header::HeaderColumns;
pub use reader::{read_input_table, read_input_table_with};
pub use row::RowOutcome;
