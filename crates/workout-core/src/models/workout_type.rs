// ABOUTME: Workout type enumeration with type-code parsing and display
// ABOUTME: Maps RUN/WLK/SWM codes to workouts and knows each workout's field count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::workout_codes;
use crate::errors::WorkoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported workout types
///
/// Each type is addressed by a short, case-sensitive code in the batch input
/// and labelled by name in the summary report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running: action, duration, weight
    Running,
    /// Sports walking: action, duration, weight, height
    SportsWalking,
    /// Swimming: action, duration, weight, pool length, pool count
    Swimming,
}

impl WorkoutType {
    /// All workout types, in dispatch-table order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Resolve a type code
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::UnknownWorkoutType` carrying the code when it is
    /// not one of `SWM`, `RUN`, `WLK`
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        match code {
            workout_codes::SWIMMING => Ok(Self::Swimming),
            workout_codes::RUNNING => Ok(Self::Running),
            workout_codes::SPORTS_WALKING => Ok(Self::SportsWalking),
            other => Err(WorkoutError::UnknownWorkoutType {
                code: other.to_owned(),
            }),
        }
    }

    /// Short type code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => workout_codes::RUNNING,
            Self::SportsWalking => workout_codes::SPORTS_WALKING,
            Self::Swimming => workout_codes::SWIMMING,
        }
    }

    /// Label used in the summary report
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional readings the workout is built from
    #[must_use]
    pub const fn field_count(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
