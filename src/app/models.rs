//! Data models for Vina log processing
//!
//! This module contains the core data structures for representing uploaded
//! log files, extracted best-mode docking results, and batch-level reports.

use serde::{Deserialize, Serialize};

// =============================================================================
// Input Documents
// =============================================================================

/// A named log file awaiting parsing
///
/// Holds the raw bytes exactly as read from disk or an archive member; the
/// filename is the document's identity in all reporting. Created once per
/// input and discarded after parsing.
#[derive(Debug, Clone)]
pub struct LogDocument {
    /// File name used to attribute results and failures
    pub filename: String,

    /// Raw, undecoded file content
    pub bytes: Vec<u8>,
}

impl LogDocument {
    /// Create a new document from a filename and its raw content
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

// =============================================================================
// Extracted Results
// =============================================================================

/// Best-mode docking result extracted from a single log file
///
/// The three numeric fields are carried through exactly as found in the log;
/// no unit conversion or range validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Name of the log file this result came from
    pub filename: String,

    /// Binding affinity of the best mode in kcal/mol
    pub affinity_kcal_per_mol: f64,

    /// RMSD lower bound relative to the best mode
    pub rmsd_lb: f64,

    /// RMSD upper bound relative to the best mode
    pub rmsd_ub: f64,
}

impl ResultRow {
    /// Create a new result row
    pub fn new(
        filename: impl Into<String>,
        affinity_kcal_per_mol: f64,
        rmsd_lb: f64,
        rmsd_ub: f64,
    ) -> Self {
        Self {
            filename: filename.into(),
            affinity_kcal_per_mol,
            rmsd_lb,
            rmsd_ub,
        }
    }
}

// =============================================================================
// Parse Outcomes
// =============================================================================

/// Reason a single log file failed to yield a result
///
/// These failures are never fatal to a batch; each is attributed to its
/// originating document and reported individually.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Bytes could not be decoded as text
    #[error("log bytes could not be decoded as text")]
    Decode,

    /// No recognizable results table in the decoded text
    #[error("no recognizable results table found")]
    TableNotFound,

    /// Results table found but the best-mode row would not parse
    #[error("malformed best-mode row: {message}")]
    MalformedRow { message: String },
}

impl ParseError {
    /// Create a malformed-row error with detail about the offending token
    pub fn malformed_row(message: impl Into<String>) -> Self {
        Self::MalformedRow {
            message: message.into(),
        }
    }
}

/// Outcome of parsing one log document
///
/// Every [`LogDocument`] handed to the aggregator yields exactly one of
/// these, success or failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The best-mode row was located and extracted
    Success(ResultRow),

    /// Parsing failed at some stage; the reason is preserved for reporting
    Failure {
        filename: String,
        error: ParseError,
    },
}

impl ParseOutcome {
    /// Filename of the document this outcome belongs to
    pub fn filename(&self) -> &str {
        match self {
            Self::Success(row) => &row.filename,
            Self::Failure { filename, .. } => filename,
        }
    }

    /// Check whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Get the extracted row, if any
    pub fn row(&self) -> Option<&ResultRow> {
        match self {
            Self::Success(row) => Some(row),
            Self::Failure { .. } => None,
        }
    }

    /// Get the failure reason, if any
    pub fn error(&self) -> Option<&ParseError> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error, .. } => Some(error),
        }
    }
}

// =============================================================================
// Batch Reports
// =============================================================================

/// Ordered collection of parse outcomes for a whole batch
///
/// Built incrementally as documents are processed and finalized once the
/// batch is exhausted. Outcome order follows input order; nothing is
/// reordered, deduplicated, or sorted by score. An empty input
/// (`attempted == 0`) is distinguishable from a fully-failed batch
/// (`attempted > 0, succeeded == 0`).
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    outcomes: Vec<ParseOutcome>,
    attempted: usize,
    succeeded: usize,
}

impl BatchReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one processed document
    pub fn push(&mut self, outcome: ParseOutcome) {
        self.attempted += 1;
        if outcome.is_success() {
            self.succeeded += 1;
        }
        self.outcomes.push(outcome);
    }

    /// All outcomes in input order
    pub fn outcomes(&self) -> &[ParseOutcome] {
        &self.outcomes
    }

    /// Successfully extracted rows in input order
    pub fn rows(&self) -> impl Iterator<Item = &ResultRow> {
        self.outcomes.iter().filter_map(ParseOutcome::row)
    }

    /// Failed documents with their reasons, in input order
    pub fn failures(&self) -> impl Iterator<Item = (&str, &ParseError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error().map(|e| (o.filename(), e)))
    }

    /// Number of documents processed
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of documents that yielded a result
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// Number of documents that failed
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }

    /// Check whether the batch had no input at all
    pub fn is_empty(&self) -> bool {
        self.attempted == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> ResultRow {
        ResultRow::new("ligand_1.log", -7.2, 0.0, 0.0)
    }

    #[test]
    fn test_outcome_accessors() {
        let success = ParseOutcome::Success(sample_row());
        assert!(success.is_success());
        assert_eq!(success.filename(), "ligand_1.log");
        assert!(success.row().is_some());
        assert!(success.error().is_none());

        let failure = ParseOutcome::Failure {
            filename: "broken.log".to_string(),
            error: ParseError::TableNotFound,
        };
        assert!(!failure.is_success());
        assert_eq!(failure.filename(), "broken.log");
        assert!(failure.row().is_none());
        assert_eq!(failure.error(), Some(&ParseError::TableNotFound));
    }

    #[test]
    fn test_report_counters() {
        let mut report = BatchReport::new();
        report.push(ParseOutcome::Success(sample_row()));
        report.push(ParseOutcome::Failure {
            filename: "broken.log".to_string(),
            error: ParseError::Decode,
        });

        assert_eq!(report.attempted(), 2);
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.rows().count(), 1);
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_empty_input_distinct_from_failed_batch() {
        let empty = BatchReport::new();
        assert!(empty.is_empty());
        assert_eq!(empty.attempted(), 0);

        let mut failed = BatchReport::new();
        failed.push(ParseOutcome::Failure {
            filename: "broken.log".to_string(),
            error: ParseError::TableNotFound,
        });
        assert!(!failed.is_empty());
        assert_eq!(failed.succeeded(), 0);
    }

    #[test]
    fn test_duplicate_filenames_kept_as_separate_rows() {
        let mut report = BatchReport::new();
        report.push(ParseOutcome::Success(sample_row()));
        report.push(ParseOutcome::Success(sample_row()));

        assert_eq!(report.attempted(), 2);
        assert_eq!(report.rows().count(), 2);
    }
}
