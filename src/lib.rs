//! Input utilities for Reynolds number calculations
//!
//! A small library for getting numbers into a lift/Reynolds calculation:
//! - Reading `Lift N`, `S` and `Re` columns from delimited rig exports
//! - Parsing single values and comma-separated lists typed by a user
//! - Typed errors naming the file, field and offending text

pub mod config;
pub mod constants;
pub mod error;
pub mod input_parser;
pub mod models;
pub mod table_reader;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{ColumnStrategy, ReaderConfig};
pub use error::{InputError, Result};
pub use input_parser::{parse_scalar, parse_vector};
pub use models::{InputData, ReadStats, TableRead};
pub use table_reader::{read_input_table, read_input_table_with};
