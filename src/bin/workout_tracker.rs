// ABOUTME: Workout tracker CLI - prints a summary for each workout package
// ABOUTME: Runs the built-in sample batch unless packages are given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Run the sample batch (swimming, running, walking)
//! workout-tracker
//!
//! # Summarize specific workouts
//! workout-tracker -p RUN:15000,1,75 -p WLK:9000,1,75,180
//!
//! # JSON output, skipping packages that fail
//! workout-tracker --format json --continue-on-error -p FOO:1,2,3 -p RUN:15000,1,75
//! ```

use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use workout_tracker::{
    batch::process_batch,
    config::{BatchPolicy, TrackerConfig},
    dispatch::{sample_packages, WorkoutPackage},
    errors::AppResult,
    formatters::{format_error, format_reports, OutputFormat},
    logging::LoggingConfig,
};

#[derive(Parser)]
#[command(
    name = "workout-tracker",
    about = "Workout statistics calculator",
    long_about = "Computes distance, mean speed, and calories for running (RUN), \
                  sports walking (WLK), and swimming (SWM) workouts."
)]
struct Cli {
    /// Workout package as CODE:v1,v2,... (repeatable; defaults to the sample batch)
    #[arg(long = "package", short = 'p', value_name = "CODE:READINGS")]
    packages: Vec<WorkoutPackage>,

    /// Output format (text, json); overrides WORKOUT_OUTPUT_FORMAT
    #[arg(long)]
    format: Option<String>,

    /// Keep going when a package fails; overrides WORKOUT_BATCH_POLICY
    #[arg(long)]
    continue_on_error: bool,

    /// Compute packages in parallel; overrides WORKOUT_PARALLEL
    #[arg(long)]
    parallel: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level("debug")
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = tracker_config(&cli);

    match run(cli.packages, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, details = %e.details, "{e}");
            match format_error(&e, config.output_format) {
                Ok(output) => eprintln!("{}", output.data),
                Err(_) => eprintln!("{e}"),
            }
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

/// Environment configuration with the command-line overrides applied
fn tracker_config(cli: &Cli) -> TrackerConfig {
    let mut config = TrackerConfig::from_env();
    if let Some(format) = cli.format.as_deref() {
        config.output_format = OutputFormat::from_str_param(format);
    }
    if cli.continue_on_error {
        config.batch_policy = BatchPolicy::ContinueOnError;
    }
    config.parallel |= cli.parallel;
    config
}

fn run(packages: Vec<WorkoutPackage>, config: &TrackerConfig) -> AppResult<()> {
    let packages = if packages.is_empty() {
        sample_packages()
    } else {
        packages
    };

    let outcome = process_batch(&packages, config);

    if !outcome.reports.is_empty() {
        let output = format_reports(&outcome.reports, config.output_format)?;
        println!("{}", output.data);
    }

    match outcome.first_error() {
        Some(error) if outcome.halted => Err(error),
        _ => Ok(()),
    }
}
