//! Error handling for table reading and field parsing.
//!
//! Provides typed errors with enough context (file path, field name,
//! offending text) for callers to report or retry.

use crate::constants::REQUIRED_LABELS;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "CSV file: {} must contain {} in the header!",
        .path.display(),
        quoted_labels(.labels)
    )]
    Format {
        path: PathBuf,
        labels: Vec<String>,
    },

    #[error("Invalid {field} value: \"{value}\". Please enter a valid number.")]
    Validation { field: String, value: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, InputError>;

impl InputError {
    /// Create an I/O error tied to the file being read
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a header format error naming the required labels
    pub fn format(path: impl AsRef<Path>) -> Self {
        Self::Format {
            path: path.as_ref().to_path_buf(),
            labels: REQUIRED_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Create a validation error for a field that is not a number
    pub fn validation(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Render labels as `'A', 'B' and 'C'`
fn quoted_labels(labels: &[String]) -> String {
    let quoted: Vec<String> = labels.iter().map(|l| format!("'{}'", l)).collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}
