//! CLI command implementations
//!
//! Each subcommand has its own module; shared statistics, logging setup,
//! and progress reporting live in [`shared`].

pub mod inspect;
pub mod shared;
pub mod summarize;

use crate::cli::args::{Args, Commands};
use crate::Result;
use shared::ProcessingStats;

/// Run the command selected on the command line
pub fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Summarize(summarize_args) => summarize::run_summarize(summarize_args),
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
