//! Inspect command implementation for the Vina processor CLI
//!
//! Parses a single log file and prints the outcome with diagnostic detail,
//! for working out why a particular file fails to summarize.

use std::time::Instant;

use colored::*;
use tracing::{debug, info};

use super::shared::{setup_logging, ProcessingStats};
use crate::app::models::LogDocument;
use crate::app::services::log_parser;
use crate::cli::args::InspectArgs;
use crate::{Error, Result};

/// Bytes of raw content shown with `--show-raw` on parse failure
const RAW_PREVIEW_BYTES: usize = 300;

/// Inspect command runner for the Vina processor
pub fn run_inspect(args: InspectArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;

    info!("Inspecting log file: {}", args.file.display());
    debug!("Inspect arguments: {:?}", args);

    args.validate()?;

    let bytes = std::fs::read(&args.file)
        .map_err(|e| Error::io(format!("Failed to read {}", args.file.display()), e))?;

    let filename = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| args.file.display().to_string());

    let document = LogDocument::new(filename, bytes);
    let parsed;

    match log_parser::parse_document(&document) {
        Ok(row) => {
            parsed = true;
            println!("{} {}", "✅ Parsed".bright_green().bold(), document.filename.bright_cyan());
            println!("   affinity:  {} kcal/mol", row.affinity_kcal_per_mol);
            println!("   rmsd l.b.: {}", row.rmsd_lb);
            println!("   rmsd u.b.: {}", row.rmsd_ub);
        }
        Err(error) => {
            parsed = false;
            println!(
                "{} {}: {}",
                "⚠️  Unable to parse".bright_yellow().bold(),
                document.filename.bright_cyan(),
                error
            );

            if args.show_raw {
                let preview_len = document.bytes.len().min(RAW_PREVIEW_BYTES);
                let preview = String::from_utf8_lossy(&document.bytes[..preview_len]);
                println!("\nRaw content (first {} bytes):", preview_len);
                println!("{}", preview);
            }
        }
    }

    let stats = ProcessingStats {
        files_attempted: 1,
        files_parsed: usize::from(parsed),
        processing_time: start_time.elapsed(),
    };

    info!("Inspection completed in {:.2?}", stats.processing_time);

    Ok(stats)
}
