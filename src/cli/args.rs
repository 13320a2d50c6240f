//! Command-line argument definitions for the Vina processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::SUMMARY_OUTPUT_FILENAME;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Vina log processor
///
/// Summarises AutoDock Vina docking runs by extracting the best-mode
/// affinity and RMSD bounds from each log file and aggregating them into
/// a single tabular report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vina-processor",
    version,
    about = "Summarise best-mode docking scores from AutoDock Vina log files",
    long_about = "A tool that extracts the best docking conformation (mode 1) from \
                  AutoDock Vina log output and aggregates scores across whole virtual \
                  screens. Accepts individual .log files, directories of logs, and .zip \
                  archives, and renders the results as a table, CSV, or JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the Vina processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Summarise a batch of Vina logs into a tabular report (main command)
    Summarize(SummarizeArgs),
    /// Parse a single log file and report the outcome in detail
    Inspect(InspectArgs),
}

/// Arguments for the summarize command (main batch processing)
#[derive(Debug, Clone, Parser)]
pub struct SummarizeArgs {
    /// Input paths to summarise
    ///
    /// Each path may be a single .log file, a directory searched recursively
    /// for .log files, or a .zip archive whose .log members are expanded.
    /// Inputs are processed in the order given.
    #[arg(
        value_name = "INPUTS",
        required = true,
        help = "Log files, directories, or .zip archives to summarise"
    )]
    pub inputs: Vec<PathBuf>,

    /// Output file for the rendered report
    ///
    /// If the path names an existing directory, the report is written there
    /// as vina_summary.csv. If not specified, the report goes to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the rendered report (stdout if omitted)"
    )]
    pub output_file: Option<PathBuf>,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (single-file diagnostics)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Log file to inspect
    #[arg(value_name = "FILE", help = "Log file to parse and report on")]
    pub file: PathBuf,

    /// Show a preview of the raw file content when parsing fails
    #[arg(long = "show-raw", help = "Show raw content preview on parse failure")]
    pub show_raw: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the rendered report
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl SummarizeArgs {
    /// Validate the summarize command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for input in &self.inputs {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input.display()
                )));
            }
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Resolve the output target, appending the default summary filename
    /// when the given path names a directory
    pub fn resolve_output_file(&self) -> Option<PathBuf> {
        self.output_file.as_ref().map(|path| {
            if path.is_dir() {
                path.join(SUMMARY_OUTPUT_FILENAME)
            } else {
                path.clone()
            }
        })
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.file.display()
            )));
        }

        if !self.file.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.file.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_summarize_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("ligand.log");
        std::fs::write(&log_path, "content").unwrap();

        let args = SummarizeArgs {
            inputs: vec![log_path.clone()],
            output_file: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        // Nonexistent input path
        let mut invalid_args = args.clone();
        invalid_args.inputs = vec![PathBuf::from("/nonexistent/ligand.log")];
        assert!(invalid_args.validate().is_err());

        // Output directory that doesn't exist
        let mut invalid_args = args.clone();
        invalid_args.output_file = Some(PathBuf::from("/nonexistent/dir/report.csv"));
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_resolve_output_file_appends_default_in_directories() {
        let temp_dir = TempDir::new().unwrap();

        let args = SummarizeArgs {
            inputs: vec![],
            output_file: Some(temp_dir.path().to_path_buf()),
            output_format: OutputFormat::Csv,
            verbose: 0,
            quiet: false,
        };

        let resolved = args.resolve_output_file().unwrap();
        assert_eq!(resolved, temp_dir.path().join(SUMMARY_OUTPUT_FILENAME));

        let explicit = SummarizeArgs {
            output_file: Some(temp_dir.path().join("report.csv")),
            ..args
        };
        assert_eq!(
            explicit.resolve_output_file().unwrap(),
            temp_dir.path().join("report.csv")
        );
    }

    #[test]
    fn test_log_level() {
        let mut args = SummarizeArgs {
            inputs: vec![],
            output_file: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = SummarizeArgs {
            inputs: vec![],
            output_file: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };

        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }
}
