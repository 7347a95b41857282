//! parse-design CLI - Validate and normalize sequencing design files
//!
//! ```bash
//! parse-design design.csv                  # Normalized CSV on stdout
//! parse-design -f json design.csv          # JSON records
//! parse-design -o samples.csv design.csv   # Write to a file
//! cat design.csv | parse-design -          # Read stdin
//! parse-design -k a.csv b.csv              # Report failures, keep going
//! ```
//!
//! Exit status is 0 when every design is valid and 1 otherwise. Each
//! failure is reported on stderr as a `FILE:` line naming the input,
//! followed by the error (`LINE:` is indented with a tab):
//!
//! ```text
//! FILE: design.csv
//! ERROR: Samplesheet -> Missing or invalid header.
//! 	LINE: HSL-1,wt_control,1,data/HSL-1_R1.fastq.gz
//! ```

use clap::{ArgAction, Parser};
use samplesheet::{
    process_batch, render, write_output, FailurePolicy, OutputFormat, PipelineError,
    PipelineOptions,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "parse-design")]
#[command(about = "Parse input design file for nextflow pipeline", long_about = None)]
struct Cli {
    /// Input csv design file(s), `-` for stdin
    #[arg(value_name = "DESIGN", required = true)]
    design: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report failing designs and continue with the rest
    #[arg(short, long)]
    keep_going: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    // Load .env file (if present), e.g. for RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when any design failed.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let options = PipelineOptions {
        on_error: if cli.keep_going {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        },
    };

    let report = match process_batch(&cli.design, &options) {
        Ok(report) => report,
        Err(failure) => {
            report_failure(&failure.path, &failure.error);
            return Ok(false);
        }
    };

    for failure in &report.failures {
        report_failure(&failure.path, &failure.error);
    }

    let content = render(&report.designs, cli.format)?;
    write_output(&content, cli.output.as_deref())?;

    Ok(report.is_success())
}

fn report_failure(path: &Path, error: &PipelineError) {
    eprintln!("FILE: {}", path.display());
    eprintln!("{}", error);
}
