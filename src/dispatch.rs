// ABOUTME: Dispatches workout type codes to records built from positional readings
// ABOUTME: Parses CODE:v1,v2,... packages and provides the built-in sample batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, WorkoutError};
use crate::intelligence::WorkoutRecord;
use crate::models::WorkoutType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Build the workout record matching `workout_type` from `data`
///
/// `SWM`, `RUN`, and `WLK` map to swimming, running, and sports walking.
/// Readings bind positionally in field order.
///
/// # Errors
///
/// Returns `WorkoutError::UnknownWorkoutType` naming the code when it is not
/// recognized, or the construction error of the selected workout
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<WorkoutRecord, WorkoutError> {
    let kind = WorkoutType::from_code(workout_type)?;
    debug!(workout.code = %kind, readings = data.len(), "Building workout record");
    WorkoutRecord::from_readings(kind, data)
}

/// One entry of the batch input: a type code and its readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Workout type code, kept as received
    pub code: String,
    /// Positional readings
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    /// Create a package
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    /// Build the workout record for this package
    ///
    /// # Errors
    ///
    /// Same as [`read_package`]
    pub fn read(&self) -> Result<WorkoutRecord, WorkoutError> {
        read_package(&self.code, &self.data)
    }
}

impl FromStr for WorkoutPackage {
    type Err = AppError;

    /// Parse `CODE:v1,v2,...`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, readings) = s.split_once(':').ok_or_else(|| {
            AppError::invalid_input(format!(
                "Package '{s}' must look like CODE:v1,v2,... (e.g. RUN:15000,1,75)"
            ))
        })?;

        let data = readings
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| {
                value.parse::<f64>().map_err(|e| {
                    AppError::invalid_input(format!("Invalid reading '{value}' in package '{s}'"))
                        .with_source(e)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(code.trim(), data))
    }
}

impl fmt::Display for WorkoutPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (index, value) in self.data.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// The built-in sample batch
#[must_use]
pub fn sample_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
