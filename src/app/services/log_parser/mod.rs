//! Vina log parser for best-mode docking results
//!
//! This module provides the parsing engine for AutoDock Vina log output:
//! it recognizes the results table embedded in loosely-structured log text,
//! locates the top-ranked row, and extracts its numeric fields. The design
//! tolerates the layout drift seen across Vina releases (header wording,
//! spacing, line-ending style, and row offsets all vary).
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`decoder`] - Byte-to-text decoding with legacy-encoding fallback
//! - [`locator`] - Results-table recognition and best-mode row location
//! - [`extractor`] - Typed extraction of the best-mode numeric fields
//!
//! ## Usage
//!
//! ```rust
//! use vina_processor::app::models::LogDocument;
//! use vina_processor::app::services::log_parser;
//!
//! # fn example() -> Result<(), vina_processor::app::models::ParseError> {
//! let content = "mode |   affinity | rmsd l.b.| rmsd u.b.\n\
//!                -----+------------+----------+----------\n\
//!                   1       -7.2      0.000      0.000\n";
//! let document = LogDocument::new("ligand.log", content.as_bytes().to_vec());
//!
//! let row = log_parser::parse_document(&document)?;
//! assert_eq!(row.affinity_kcal_per_mol, -7.2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod decoder;
pub mod extractor;
pub mod locator;

#[cfg(test)]
pub mod tests;

use tracing::debug;

use crate::app::models::{LogDocument, ParseError, ResultRow};

/// Parse one log document into its best-mode result
///
/// Composes the three pure stages — decode, locate, extract — and
/// short-circuits on the first failing stage. Parsing the same document
/// twice yields the same outcome; nothing here holds state.
pub fn parse_document(document: &LogDocument) -> Result<ResultRow, ParseError> {
    let text = decoder::decode(&document.bytes)?;
    let row = locator::locate_best_mode_row(&text)?;
    let (affinity, rmsd_lb, rmsd_ub) = extractor::extract(row)?;

    debug!(
        "Extracted best mode from {}: affinity {} kcal/mol",
        document.filename, affinity
    );

    Ok(ResultRow::new(
        &document.filename,
        affinity,
        rmsd_lb,
        rmsd_ub,
    ))
}
