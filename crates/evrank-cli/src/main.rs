//! evrank CLI
//!
//! Command-line interface for the EV rankings delta calculator

use clap::{Parser, Subcommand};
use evrank_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "evrank")]
#[command(about = "EV rankings delta calculator", long_about = None)]
struct Cli {
    /// Log output format on stderr
    #[arg(long, global = true, default_value = "pretty", value_parser = ["pretty", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare the current snapshot against the previous one
    Compare(commands::compare::CompareArgs),
    /// Promote a snapshot document to current and add it to history
    Archive(commands::archive::ArchiveArgs),
}

fn main() {
    let cli = Cli::parse();
    init(Profile::from_format(&cli.log_format).unwrap_or(Profile::Development));

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Archive(args) => commands::archive::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
