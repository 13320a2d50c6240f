//! Application constants for the Vina processor
//!
//! This module contains the table-recognition tokens, layout offsets,
//! file patterns, and output defaults used throughout the application.

// =============================================================================
// File Patterns
// =============================================================================

/// File extension of Vina log files (lowercase, without the dot)
pub const LOG_EXTENSION: &str = "log";

/// File extension of zip archives accepted as batch input
pub const ZIP_EXTENSION: &str = "zip";

/// Default filename for an exported CSV summary
pub const SUMMARY_OUTPUT_FILENAME: &str = "vina_summary.csv";

// =============================================================================
// Results Table Recognition
// =============================================================================

/// Tokens that must all appear (case-insensitively) on a results-table
/// header line for the line-oriented scan to accept it
pub const HEADER_TOKENS: &[&str] = &["mode", "affinity", "rmsd"];

/// Line offsets from the header at which the best-mode row may start.
///
/// Vina releases differ in how many filler lines (column units, table
/// border) sit between the header and the first data row; both observed
/// layouts are tried in order.
pub const ROW_OFFSETS: &[usize] = &[2, 3];

/// Minimum whitespace-separated tokens in a valid best-mode row
/// (mode number, affinity, RMSD lower bound, RMSD upper bound)
pub const MIN_ROW_TOKENS: usize = 4;

/// Whole-text pattern for results tables the line scan misses.
///
/// Matches a `mode | affinity` header line, at most one intermediate line
/// (two-line headers carry the RMSD column labels there), a border line of
/// dashes, plus signs, and spaces, then the best-mode row: a leading `1`
/// followed by three signed decimal numbers.
pub const TABLE_PATTERN: &str = r"(?im)^[^\n]*mode[^\n]*\|[^\n]*affinity[^\n]*\n(?:[^\n]*\n)??[-+ ]+\n[ \t]*(1[ \t]+[-+]?[0-9]+(?:\.[0-9]+)?[ \t]+[-+]?[0-9]+(?:\.[0-9]+)?[ \t]+[-+]?[0-9]+(?:\.[0-9]+)?)";

// =============================================================================
// Report Columns
// =============================================================================

/// Column order of the tabular report, fixed across all output formats
pub const REPORT_COLUMNS: &[&str] = &["filename", "affinity_kcal_per_mol", "rmsd_lb", "rmsd_ub"];

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a file name carries the Vina log extension
pub fn is_log_name(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LOG_EXTENSION))
}

/// Check if a file name carries the zip archive extension
pub fn is_zip_name(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ZIP_EXTENSION))
}
