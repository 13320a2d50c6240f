//! Summarize command implementation for the Vina processor CLI
//!
//! This module drives the full batch pipeline: collect documents from the
//! given inputs, aggregate them through the parser, and render the report
//! in the requested format.

use std::time::Instant;

use colored::*;
use tracing::{debug, info, warn};

use super::shared::{create_progress_bar, setup_logging, ProcessingStats};
use crate::app::adapters::filesystem;
use crate::app::services::{aggregator, report};
use crate::cli::args::{OutputFormat, SummarizeArgs};
use crate::{Error, Result};

/// Summarize command runner for the Vina processor
///
/// Collects, parses, and reports on every log file named by the inputs.
/// A batch in which some (or all) files fail to parse still completes and
/// reports; only operational errors abort the run.
pub fn run_summarize(args: SummarizeArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting Vina log summary");
    debug!("Summarize arguments: {:?}", args);

    args.validate()?;

    let documents = filesystem::collect_documents(&args.inputs)?;
    if documents.is_empty() {
        warn!("No log files found in the given inputs");
    }

    let progress = create_progress_bar(documents.len() as u64, args.show_progress());
    progress.set_message("Parsing log files");

    let batch = aggregator::aggregate(progress.wrap_iter(documents.into_iter()));
    progress.finish_and_clear();

    let rendered = match args.output_format {
        OutputFormat::Human => report::render_table(&batch),
        OutputFormat::Csv => report::render_csv(&batch),
        OutputFormat::Json => report::render_json(&batch)?,
    };

    match args.resolve_output_file() {
        Some(path) => {
            std::fs::write(&path, &rendered).map_err(|e| {
                Error::io(format!("Failed to write report to {}", path.display()), e)
            })?;
            info!("Report written to: {}", path.display());

            if !args.quiet {
                println!(
                    "{} {}",
                    "Report written to".bright_green(),
                    path.display().to_string().bright_cyan()
                );
            }
        }
        None => print!("{}", rendered),
    }

    let stats = ProcessingStats {
        files_attempted: batch.attempted(),
        files_parsed: batch.succeeded(),
        processing_time: start_time.elapsed(),
    };

    info!(
        "Summary completed in {:.2?}: {} of {} file(s) parsed",
        stats.processing_time, stats.files_parsed, stats.files_attempted
    );

    Ok(stats)
}
