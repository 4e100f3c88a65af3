//! HeapSort CLI
//!
//! Command-line front-end over the heapsort engine and SQLite store

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "heapsort")]
#[command(about = "HeapSort - stored integer arrays, edits and heap sort history", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: commands::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create, inspect and edit stored arrays
    Array(commands::array::ArrayArgs),
    /// Sort arrays and inspect the sort history
    Sort(commands::sort::SortArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.global.log {
        heapsort_core::logging_facility::init(profile.into());
    }

    let result = match cli.command {
        Commands::Array(args) => commands::array::execute(args, &cli.global),
        Commands::Sort(args) => commands::sort::execute(args, &cli.global),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
