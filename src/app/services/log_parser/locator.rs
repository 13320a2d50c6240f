//! Results-table location
//!
//! Vina embeds its results table in free-form log text, and the exact layout
//! has drifted across releases: some builds put the RMSD column labels on the
//! header line, others on a units line below it, which shifts the first data
//! row between two and three lines past the header. Two strategies are
//! applied in order; the first one to produce a valid row wins.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::app::models::ParseError;
use crate::constants::{HEADER_TOKENS, MIN_ROW_TOKENS, ROW_OFFSETS, TABLE_PATTERN};

/// Find the best-mode data row within normalized log text
///
/// The line-oriented header scan runs first; the whole-text pattern match
/// covers table layouts the scan misses. Returns the row's text, or
/// [`ParseError::TableNotFound`] when neither strategy locates a valid row.
pub fn locate_best_mode_row(text: &str) -> Result<&str, ParseError> {
    if let Some(row) = scan_for_header(text) {
        return Ok(row);
    }

    if let Some(row) = match_table_pattern(text) {
        debug!("header scan missed, pattern match located the results table");
        return Ok(row);
    }

    Err(ParseError::TableNotFound)
}

/// Line-oriented scan: find the header line, then probe the known row
/// offsets below it
fn scan_for_header(text: &str) -> Option<&str> {
    let lines: Vec<&str> = text.lines().collect();

    for (index, line) in lines.iter().enumerate() {
        if !is_header_line(line) {
            continue;
        }

        for &offset in ROW_OFFSETS {
            if let Some(candidate) = lines.get(index + offset) {
                if is_candidate_row(candidate) {
                    debug!("header at line {}, best-mode row at offset {}", index, offset);
                    return Some(candidate.trim());
                }
            }
        }

        // Only the first header line is probed; the pattern strategy covers
        // anything the scan rejects here.
        return None;
    }

    None
}

/// A header line case-insensitively contains every recognition token,
/// in any order, anywhere in the line
fn is_header_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    HEADER_TOKENS.iter().all(|token| lowered.contains(token))
}

/// A candidate row has enough fields and opens with a bare mode number
fn is_candidate_row(line: &str) -> bool {
    let mut tokens = line.split_whitespace();

    match tokens.next() {
        Some(first) => {
            first.bytes().all(|b| b.is_ascii_digit()) && tokens.count() >= MIN_ROW_TOKENS - 1
        }
        None => false,
    }
}

/// Whole-text fallback: one pass of the table pattern over the full log
fn match_table_pattern(text: &str) -> Option<&str> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    let pattern =
        PATTERN.get_or_init(|| Regex::new(TABLE_PATTERN).expect("table pattern must compile"));

    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|matched| matched.as_str())
}
