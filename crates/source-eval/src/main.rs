//! CLI entry point for the data source evaluation.

use anyhow::{Result, anyhow};
use clap::Parser;
use source_eval::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR};
use source_eval::{EvaluationOutcome, EvaluationResult, EvaluatorConfig, SourceEvaluator};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Evaluate a tabular data source",
    long_about = "Loads a CSV dataset and writes three reports: basic information \
                  (shape, column types, memory), data quality (missing and unique \
                  ratios per column) and completeness (complete vs. partial rows).\n\n\
                  Run without arguments to evaluate data/movies.csv into \
                  results/source_evaluation.\n\n\
                  EXAMPLES:\n  \
                  source-eval\n  \
                  source-eval -i films.csv -o reports/\n  \
                  gunzip -c films.csv.gz | source-eval -i -\n  \
                  source-eval --json | jq .completeness"
)]
struct Args {
    /// Path to the CSV file to evaluate (`-` reads standard input)
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: String,

    /// Output directory for the reports
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Print the reports as JSON to stdout instead of the summary
    ///
    /// Disables all progress logs. Report files are still written.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    info!("Starting data source evaluation...");

    let outcome = match evaluate(&args) {
        Ok(outcome) => outcome,
        Err(e) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&e)?);
            }
            error!("Evaluation failed: {}", e);
            return Err(anyhow!(e));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
        return Ok(());
    }

    print_summary(&outcome);

    Ok(())
}

fn evaluate(args: &Args) -> EvaluationResult<EvaluationOutcome> {
    let config = EvaluatorConfig::builder()
        .input_path(&args.input)
        .output_dir(&args.output)
        .build()?;

    SourceEvaluator::new(config).run()
}

/// Print the key findings of a finished run.
///
/// Uses `println!` intentionally: this is the user-facing result and must be
/// visible regardless of the log level.
fn print_summary(outcome: &EvaluationOutcome) {
    let report = &outcome.report;

    println!();
    println!("{}", "=".repeat(80));
    println!("EVALUATION COMPLETE");
    println!("{}", "=".repeat(80));
    println!("Results saved to: {}", outcome.output_dir.display());
    for path in &outcome.output_files {
        println!("  - {}", path.display());
    }
    println!();

    println!("Key findings:");
    println!("  1. Records: {}", report.basic_info.row_count);
    println!("  2. Columns: {}", report.basic_info.column_count);
    println!(
        "  3. Complete rows: {}",
        report.completeness.complete_row_pct_display()
    );
    println!("{}", "=".repeat(80));
}
