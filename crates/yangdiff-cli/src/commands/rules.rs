//! Rules command
//!
//! Usage: yangdiff rules check <FILE>

use clap::{Args, Subcommand};
use std::path::PathBuf;
use yangdiff_core::rules::load_rules_from_path;

#[derive(Debug, Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RulesCommand {
    /// Validate a rule file and print its rule count and digest
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Rule file (YAML or JSON)
    pub path: PathBuf,
}

/// Execute rules command
pub fn execute(args: RulesArgs) -> Result<i32, Box<dyn std::error::Error>> {
    match args.command {
        RulesCommand::Check(check_args) => execute_check(check_args),
    }
}

fn execute_check(args: CheckArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let table = load_rules_from_path(&args.path)?;
    println!("rules: {}", table.len());
    println!("digest: {}", table.digest()?);
    Ok(0)
}
