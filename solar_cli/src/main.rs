//! # Solarframe CLI
//!
//! Interactive and batch front end for the PV mounting frame calculation.
//!
//! ```text
//! solarframe                      # prompt for every field
//! solarframe --defaults --json    # run the configured defaults, print JSON
//! solarframe --input array.json   # run a saved input
//! ```

mod config;
mod prompt;
mod report;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use solar_core::{calculate, calculate_lenient, CalcError, MountInput, MountResult, ReferenceData};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{load_reference_data, Config};
use prompt::{PromptError, Prompter};
use report::{format_report, ReportEnvelope};

#[derive(Parser, Debug)]
#[command(name = "solarframe", version, about = "PV mounting frame load and section calculator (GB 50009 simplified)")]
struct Args {
    /// Configuration file (default: ./solarframe.toml if present)
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Alternate reference dataset (TOML, or JSON by extension)
    #[arg(long, value_name = "FILE")]
    reference: Option<PathBuf>,

    /// Run once on a JSON input file instead of prompting
    #[arg(long, value_name = "JSON", conflicts_with = "defaults")]
    input: Option<PathBuf>,

    /// Run once on the configured defaults instead of prompting
    #[arg(long)]
    defaults: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Stop at the first failing step instead of substituting defaults
    #[arg(long)]
    strict: bool,

    /// Log filter, e.g. "debug" or "solar_core=trace" (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn init_logging(args: &Args, config: &Config) -> Result<()> {
    let filter = match (&args.log_level, &config.log_level) {
        (Some(level), _) => EnvFilter::try_new(level)?,
        (None, config_level) => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(config_level.as_deref().unwrap_or("warn")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("setting default subscriber failed: {err}"))
}

fn run(args: &Args, input: &MountInput, data: &ReferenceData) -> Result<MountResult, CalcError> {
    if args.strict {
        calculate(input, data)
    } else {
        Ok(calculate_lenient(input, data))
    }
}

fn print_result(args: &Args, input: &MountInput, result: &MountResult, data: &ReferenceData) -> Result<()> {
    if args.json {
        let envelope = ReportEnvelope::new(input, result, &data.name);
        let json = serde_json::to_string_pretty(&envelope).context("serializing report to JSON")?;
        println!("{}", json);
    } else {
        print!("{}", format_report(input, result));
    }
    Ok(())
}

fn print_error_json(args: &Args, err: &CalcError) {
    debug!(code = err.error_code(), "calculation failed");
    if args.json {
        if let Ok(json) = serde_json::to_string_pretty(err) {
            eprintln!("{}", json);
        }
    }
}

fn run_once(args: &Args, input: &MountInput, data: &ReferenceData) -> Result<()> {
    match run(args, input, data) {
        Ok(result) => print_result(args, input, &result, data),
        Err(err) => {
            print_error_json(args, &err);
            Err(err.into())
        }
    }
}

fn interactive(args: &Args, config: &Config, data: &ReferenceData) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    loop {
        prompter.say(format!("\n{}", "=".repeat(50)))?;
        prompter.say("PV mounting frame load and section calculator (GB 50009)")?;
        prompter.say("=".repeat(50))?;

        let input = match prompter.mount_input(&config.defaults, &data.cities) {
            Ok(input) => input,
            Err(PromptError::Closed) => break,
            Err(err) => return Err(err.into()),
        };

        let question = match run(args, &input, data) {
            Ok(result) => {
                print_result(args, &input, &result, data)?;
                "\nRecalculate?"
            }
            Err(err) => {
                eprintln!("\nError: {}", err);
                print_error_json(args, &err);
                "Start over?"
            }
        };

        match prompter.confirm(question) {
            Ok(true) => continue,
            Ok(false) | Err(PromptError::Closed) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("\nDone.");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load_or_default(args.config.as_deref())?;
    init_logging(&args, &config)?;

    let custom_data = match args.reference.as_ref().or(config.reference_data.as_ref()) {
        Some(path) => Some(load_reference_data(path)?),
        None => None,
    };
    let data = custom_data.as_ref().unwrap_or_else(|| ReferenceData::builtin());
    info!(dataset = %data.name, strict = args.strict, "starting");

    if let Some(path) = &args.input {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading input {}", path.display()))?;
        let input: MountInput = serde_json::from_str(&content)
            .with_context(|| format!("parsing input {}", path.display()))?;
        run_once(&args, &input, data)
    } else if args.defaults {
        run_once(&args, &config.defaults, data)
    } else {
        interactive(&args, &config, data)
    }
}
