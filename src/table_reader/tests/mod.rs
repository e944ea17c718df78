//! Test utilities for the table reader
//!
//! Shared fixtures and temporary-file helpers used across the reader test
//! modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod header_tests;

/// Header matching the rig export layout: S, Re and lift in columns 6 to 8
pub const RIG_HEADER: &str = "Run,Time,Speed,Alpha,Temp,S,Re,Lift N";

/// Helper to create a complete rig export with three valid rows
pub fn create_rig_table() -> String {
    format!(
        "{RIG_HEADER}
1,0.0,10.0,2.0,20.1,0.10,1500,4.25
2,0.5,12.0,2.0,20.1,0.20,2500,4.90
3,1.0,14.0,2.0,20.2,0.30,3500,5.60"
    )
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
