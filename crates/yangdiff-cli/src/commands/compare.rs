//! Compare command
//!
//! Usage: yangdiff compare --left <FILE> --right <FILE> [--type <TYPE>] [--rules <FILE>]

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use yangdiff_core::render::overall_verdict;
use yangdiff_core::rules::load_rules_from_path;
use yangdiff_core::yangdiff_core_types::PassContext;
use yangdiff_core::{
    render_text, ComparatorRegistry, CompareType, Compatibility, ComparisonReport, RuleTable,
    SchemaContext, YangComparator,
};

/// Exit code when `--fail-on-nbc` is set and the pass is non-backward-compatible
pub const EXIT_NBC: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Previous module set (YAML or JSON)
    #[arg(long)]
    pub left: PathBuf,

    /// New module set (YAML or JSON)
    #[arg(long)]
    pub right: PathBuf,

    /// stmt, tree or compatible-check
    #[arg(long = "type", value_parser = parse_compare_type, default_value = "compatible-check")]
    pub compare_type: CompareType,

    /// Compatibility rule file (YAML or JSON); built-in verdicts only when absent
    #[arg(long)]
    pub rules: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with code 2 when the overall verdict is NBC
    #[arg(long)]
    pub fail_on_nbc: bool,
}

fn parse_compare_type(raw: &str) -> Result<CompareType, String> {
    CompareType::from_name(raw)
        .ok_or_else(|| format!("unknown compare type '{}' (stmt, tree, compatible-check)", raw))
}

/// Execute compare command, returning the process exit code
pub fn execute(args: CompareArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let left = SchemaContext::load(&args.left)?;
    let right = SchemaContext::load(&args.right)?;

    let (rules, digest) = match &args.rules {
        Some(path) => {
            let table = load_rules_from_path(path)?;
            let digest = table.digest()?;
            (table, Some(digest))
        }
        None => (RuleTable::new(), None),
    };

    let ctx = PassContext::new().with_origin("cli");
    let results = YangComparator::new(&left, &right).compare_with_context(
        &ctx,
        args.compare_type,
        &rules,
        &ComparatorRegistry::standard(),
    );
    tracing::debug!(pass_id = %ctx.pass_id, result_count = results.len(), "comparison done");

    let rendered = match args.format {
        OutputFormat::Text => render_text(&results),
        OutputFormat::Json => {
            let mut json =
                ComparisonReport::build(args.compare_type, &results, digest).to_json_pretty()?;
            json.push('\n');
            json
        }
    };

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &rendered)?;
        println!("✓ Wrote {} result(s) to {}", results.len(), output_path.display());
    } else {
        print!("{}", rendered);
    }

    let verdict = overall_verdict(&results);
    if args.fail_on_nbc
        && args.compare_type != CompareType::Stmt
        && verdict == Compatibility::NonBackwardCompatible
    {
        return Ok(EXIT_NBC);
    }
    Ok(0)
}
