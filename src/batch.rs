// ABOUTME: Batch runner turning workout packages into summary reports
// ABOUTME: Applies the halt or continue failure policy, optionally in parallel with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{BatchPolicy, TrackerConfig};
use crate::dispatch::WorkoutPackage;
use crate::errors::{AppError, WorkoutError};
use crate::models::SummaryReport;
use crate::report::build_report;
use rayon::prelude::*;
use tracing::{info, warn};

/// A package that could not be turned into a report
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    /// Position of the package in the batch
    pub index: usize,
    /// The package that failed
    pub package: WorkoutPackage,
    /// Why it failed
    pub error: WorkoutError,
}

/// Result of processing a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    /// Reports, in input order
    pub reports: Vec<SummaryReport>,
    /// Failed packages; at most one when the batch halted
    pub failures: Vec<BatchFailure>,
    /// Processing stopped at the first failure
    pub halted: bool,
}

impl BatchOutcome {
    /// Whether every package produced a report
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The first failure as an application error, with the package attached
    #[must_use]
    pub fn first_error(&self) -> Option<AppError> {
        self.failures.first().map(|failure| {
            AppError::from(failure.error.clone())
                .with_detail("package_index", failure.index)
                .with_detail("package", failure.package.to_string())
        })
    }
}

/// Build the report of one package
///
/// # Errors
///
/// Returns the dispatch, construction, or calculation error of the package
pub fn process_package(package: &WorkoutPackage) -> Result<SummaryReport, WorkoutError> {
    let record = package.read()?;
    build_report(&record)
}

/// Process every package of a batch
///
/// Packages are independent, so with `config.parallel` they are computed on
/// the rayon pool; reports and failures keep input order either way.
///
/// Under `BatchPolicy::HaltOnError` processing stops at the first failure,
/// keeping the reports produced before it.
#[must_use]
pub fn process_batch(packages: &[WorkoutPackage], config: &TrackerConfig) -> BatchOutcome {
    info!(
        batch.size = packages.len(),
        batch.policy = ?config.batch_policy,
        batch.parallel = config.parallel,
        "Processing workout batch"
    );

    let results: Vec<Result<SummaryReport, WorkoutError>> = if config.parallel {
        packages.par_iter().map(process_package).collect()
    } else {
        packages.iter().map(process_package).collect()
    };

    let mut outcome = BatchOutcome::default();
    for (index, (package, result)) in packages.iter().zip(results).enumerate() {
        match result {
            Ok(report) => outcome.reports.push(report),
            Err(error) => {
                warn!(
                    batch.index = index,
                    workout.code = %package.code,
                    error = %error,
                    "Workout package failed"
                );
                outcome.failures.push(BatchFailure {
                    index,
                    package: package.clone(),
                    error,
                });
                if config.batch_policy == BatchPolicy::HaltOnError {
                    outcome.halted = true;
                    break;
                }
            }
        }
    }

    info!(
        batch.reports = outcome.reports.len(),
        batch.failures = outcome.failures.len(),
        batch.halted = outcome.halted,
        "Workout batch processed"
    );

    outcome
}
