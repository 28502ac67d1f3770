//! yangdiff CLI
//!
//! Compare two YANG module sets and classify the changes

use clap::{Parser, Subcommand, ValueEnum};
use yangdiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "yangdiff")]
#[command(about = "yangdiff - YANG module-tree diff and compatibility check", long_about = None)]
struct Cli {
    /// Diagnostic logging to stderr; off unless given
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two module sets
    Compare(commands::compare::CompareArgs),
    /// Rule file operations
    Rules(commands::rules::RulesArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log_format {
        Some(LogFormat::Pretty) => init(Profile::Development),
        Some(LogFormat::Json) => init(Profile::Production),
        None => {}
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Rules(args) => commands::rules::execute(args),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
