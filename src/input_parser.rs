//! Numeric parsing for user-supplied fields
//!
//! Converts a single value or a comma-separated list into `f64`s. Failures
//! carry the caller's field name and the offending text so they can be
//! shown back to the user as-is.

use crate::constants::LIST_SEPARATOR;
use crate::error::{InputError, Result};

/// Parse a single numeric value
///
/// Surrounding whitespace is ignored. The error keeps `input` exactly as given.
pub fn parse_scalar(input: &str, field_name: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::validation(field_name, input))
}

/// Parse a comma-separated list of numeric values
///
/// All whitespace is removed before splitting. Empty tokens at the end of a
/// list (`"1,2,"`) are dropped; any other empty token is a validation error.
pub fn parse_vector(input: &str, field_name: &str) -> Result<Vec<f64>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens: Vec<&str> = compact.split(LIST_SEPARATOR).collect();
    if tokens.len() > 1 {
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
    }

    tokens
        .into_iter()
        .map(|token| parse_scalar(token, field_name))
        .collect()
}
