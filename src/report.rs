// ABOUTME: Builds summary reports from workout records and renders their messages
// ABOUTME: Computes distance, mean speed, then calories and tags the workout label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::WorkoutError;
use crate::intelligence::WorkoutRecord;
use crate::models::SummaryReport;
use tracing::debug;

/// Compute the summary report of a workout
///
/// # Errors
///
/// Propagates the workout's calorie calculation error
pub fn build_report(record: &WorkoutRecord) -> Result<SummaryReport, WorkoutError> {
    let distance = record.distance();
    let speed = record.mean_speed();
    let calories = record.spent_calories()?;

    debug!(
        workout.kind = record.training_type(),
        workout.distance_km = distance,
        workout.speed_kmh = speed,
        workout.calories = calories,
        "Workout metrics computed"
    );

    Ok(SummaryReport::new(
        record.training_type(),
        record.base().duration,
        distance,
        speed,
        calories,
    ))
}

/// Human-readable message for a report, values with three decimals
#[must_use]
pub fn format_message(report: &SummaryReport) -> String {
    report.message()
}
