use clap::Parser;
use std::process;
use vina_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Vina Processor - AutoDock Vina Log Summariser");
    println!("=============================================");
    println!();
    println!("Extract the best docking conformation (mode 1) from AutoDock Vina");
    println!("log files and aggregate the scores into a single tabular report.");
    println!();
    println!("USAGE:");
    println!("    vina-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summarize   Summarise a batch of Vina logs into a report (main command)");
    println!("    inspect     Parse a single log file and report the outcome in detail");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarise a directory of docking logs:");
    println!("    vina-processor summarize ./screens/run_01");
    println!();
    println!("    # Summarise a zip archive and export CSV:");
    println!("    vina-processor summarize screen.zip --output-format csv -o vina_summary.csv");
    println!();
    println!("    # Work out why one log fails to parse:");
    println!("    vina-processor inspect ligand_42.log --show-raw");
    println!();
    println!("For detailed help on any command, use:");
    println!("    vina-processor <COMMAND> --help");
}
