//! Reader configuration and validation.
//!
//! Settings are passed explicitly to each read call; nothing here is
//! process-wide.

use crate::constants::DEFAULT_DELIMITER;
use crate::error::{InputError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where the S, Re and lift values are taken from in each data row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnStrategy {
    /// Fixed positions 5, 6 and 7, whatever the header says
    #[default]
    FixedOffsets,
    /// Positions of the matching labels in the header line
    Header,
}

/// Configuration for reading an input table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Literal field separator
    pub delimiter: String,

    /// Column lookup for data rows
    pub columns: ColumnStrategy,

    /// Emit per-row diagnostic events
    pub debug: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            columns: ColumnStrategy::default(),
            debug: false,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with the given delimiter and default settings
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            ..Self::default()
        }
    }

    pub fn with_columns(mut self, columns: ColumnStrategy) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(InputError::configuration("delimiter must not be empty"));
        }

        debug!(
            "Reader configuration validated: delimiter={:?}, columns={:?}, debug={}",
            self.delimiter, self.columns, self.debug
        );
        Ok(())
    }
}
