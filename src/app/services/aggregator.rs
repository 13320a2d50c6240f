//! Batch aggregation of log documents
//!
//! Drives the parsing pipeline across a collection of documents, producing
//! exactly one outcome per document in input order.

use tracing::{info, warn};

use crate::app::models::{BatchReport, LogDocument, ParseOutcome};
use crate::app::services::log_parser;

/// Aggregate a collection of log documents into a batch report
///
/// Each document is parsed to completion before the next begins; nothing is
/// shared between parses. A failure never aborts the batch — the outcome
/// keeps the originating stage's reason attached to the document's filename
/// and processing moves on. Output order follows input order with no
/// reordering, deduplication, or sorting by score.
pub fn aggregate(documents: impl IntoIterator<Item = LogDocument>) -> BatchReport {
    let mut report = BatchReport::new();

    for document in documents {
        let outcome = match log_parser::parse_document(&document) {
            Ok(row) => ParseOutcome::Success(row),
            Err(error) => {
                warn!("Could not parse {}: {}", document.filename, error);
                ParseOutcome::Failure {
                    filename: document.filename,
                    error,
                }
            }
        };

        report.push(outcome);
    }

    info!(
        "Parsed {} of {} log file(s)",
        report.succeeded(),
        report.attempted()
    );

    report
}
