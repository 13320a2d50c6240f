//! Best-mode row extraction
//!
//! Turns the located table row into typed numeric fields. Values are passed
//! through exactly as written in the log; no unit conversion or range
//! validation is applied.

use crate::app::models::ParseError;
use crate::constants::MIN_ROW_TOKENS;

/// Extract `(affinity, rmsd_lb, rmsd_ub)` from a best-mode row
///
/// The row is split on runs of whitespace. The first token must be a bare
/// mode number (its value is not checked further), and the following three
/// tokens must parse as finite floating-point numbers in the fixed order
/// affinity, RMSD lower bound, RMSD upper bound.
pub fn extract(row: &str) -> Result<(f64, f64, f64), ParseError> {
    let tokens: Vec<&str> = row.split_whitespace().collect();

    if tokens.len() < MIN_ROW_TOKENS {
        return Err(ParseError::malformed_row(format!(
            "expected at least {} fields, found {}",
            MIN_ROW_TOKENS,
            tokens.len()
        )));
    }

    if !tokens[0].bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::malformed_row(format!(
            "mode number '{}' is not an integer",
            tokens[0]
        )));
    }

    let affinity = parse_field(tokens[1], "affinity")?;
    let rmsd_lb = parse_field(tokens[2], "rmsd_lb")?;
    let rmsd_ub = parse_field(tokens[3], "rmsd_ub")?;

    Ok((affinity, rmsd_lb, rmsd_ub))
}

/// Parse a single numeric field, rejecting non-finite values
fn parse_field(token: &str, field_name: &str) -> Result<f64, ParseError> {
    let value: f64 = token.parse().map_err(|_| {
        ParseError::malformed_row(format!("invalid {} value '{}'", field_name, token))
    })?;

    if !value.is_finite() {
        return Err(ParseError::malformed_row(format!(
            "non-finite {} value '{}'",
            field_name, token
        )));
    }

    Ok(value)
}
