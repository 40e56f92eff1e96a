//! teamcheck - validate multi-agent team configurations
//!
//! Loads a YAML or JSON team configuration, runs the validation engine,
//! prints a report and writes the issue records to disk.
//!
//! ## Exit codes
//!
//! - `0`: validation passed (warnings and info allowed)
//! - `1`: validation failed (at least one error)
//! - `2`: the configuration could not be loaded or the report not written

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, Level};

use teamcheck_core::{
    load_document, render_records_json, render_text_report, validate, write_issue_records_json,
    ValidationReport,
};

const EXIT_PASSED: u8 = 0;
const EXIT_FAILED: u8 = 1;
const EXIT_LOAD_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "teamcheck")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate a multi-agent team configuration", long_about = None)]
struct Cli {
    /// Team configuration file (.yaml, .yml or .json)
    config: PathBuf,

    /// Where to write the JSON issue records
    #[arg(long, env = "TEAMCHECK_REPORT", default_value = "validation-report.json")]
    report: PathBuf,

    /// Do not write the JSON issue records
    #[arg(long)]
    no_report: bool,

    /// Report format printed on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    teamcheck_core::init_tracing(cli.log_json, level);

    match run(&cli) {
        Ok(report) if report.passed() => ExitCode::from(EXIT_PASSED),
        Ok(_) => ExitCode::from(EXIT_FAILED),
        Err(err) => {
            error!(error = %err, "validation aborted");
            eprintln!("Validation failed: {err:#}");
            ExitCode::from(EXIT_LOAD_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<ValidationReport> {
    info!(config = %cli.config.display(), "validating team configuration");
    let document = load_document(&cli.config)
        .with_context(|| format!("Invalid config in {:?}", cli.config))?;
    let report = validate(&document);

    match cli.format {
        OutputFormat::Text => {
            println!("Validating team configuration: {}", cli.config.display());
            println!("{}", render_text_report(&report));
        }
        OutputFormat::Json => println!("{}", render_records_json(&report)?),
    }

    if !cli.no_report {
        write_issue_records_json(&cli.report, &report)
            .with_context(|| format!("Failed to write report: {:?}", cli.report))?;
        if cli.format == OutputFormat::Text {
            println!("Detailed report saved to: {}", cli.report.display());
        }
    }

    Ok(report)
}
