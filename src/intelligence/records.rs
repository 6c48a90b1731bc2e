// ABOUTME: Workout record types built from positional sensor readings
// ABOUTME: Shared base fields embedded by value in Running, SportsWalking, and Swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::WorkoutError;
use crate::models::WorkoutType;
use serde::{Deserialize, Serialize};

/// Fields every workout shares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBase {
    /// Number of actions performed (steps or strokes)
    pub action: i64,
    /// Duration in hours
    pub duration: f64,
    /// Athlete weight in kilograms
    pub weight: f64,
}

impl WorkoutBase {
    /// Create the shared part of a workout record
    #[must_use]
    pub const fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    /// Shared fields
    pub base: WorkoutBase,
}

impl Running {
    /// Create a running record
    #[must_use]
    pub const fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            base: WorkoutBase::new(action, duration, weight),
        }
    }
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    /// Shared fields
    pub base: WorkoutBase,
    /// Athlete height in centimeters
    pub height: f64,
}

impl SportsWalking {
    /// Create a sports walking record
    #[must_use]
    pub const fn new(action: i64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: WorkoutBase::new(action, duration, weight),
            height,
        }
    }
}

/// Swimming workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Shared fields
    pub base: WorkoutBase,
    /// Pool length in meters
    pub length_pool: f64,
    /// Number of pool lengths swum
    pub count_pool: f64,
}

impl Swimming {
    /// Create a swimming record
    #[must_use]
    pub const fn new(
        action: i64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            base: WorkoutBase::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

/// A workout of any supported type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkoutRecord {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Swimming workout
    Swimming(Swimming),
}

impl WorkoutRecord {
    /// Bind positional readings to the fields of `workout_type`
    ///
    /// Readings are taken in declaration order: action, duration, weight, then
    /// `height` for walking or `length_pool`, `count_pool` for swimming.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::ArgumentCount` when the number of readings differs
    /// from the workout's field count, and `WorkoutError::InvalidAction` when the
    /// action reading is not a whole number
    pub fn from_readings(workout_type: WorkoutType, data: &[f64]) -> Result<Self, WorkoutError> {
        let expected = workout_type.field_count();
        if data.len() != expected {
            return Err(WorkoutError::ArgumentCount {
                workout_type: workout_type.code(),
                expected,
                actual: data.len(),
            });
        }

        match (workout_type, data) {
            (WorkoutType::Running, &[action, duration, weight]) => Ok(Self::Running(
                Running::new(action_count(action)?, duration, weight),
            )),
            (WorkoutType::SportsWalking, &[action, duration, weight, height]) => Ok(
                Self::SportsWalking(SportsWalking::new(
                    action_count(action)?,
                    duration,
                    weight,
                    height,
                )),
            ),
            (WorkoutType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
                Ok(Self::Swimming(Swimming::new(
                    action_count(action)?,
                    duration,
                    weight,
                    length_pool,
                    count_pool,
                )))
            }
            _ => Err(WorkoutError::ArgumentCount {
                workout_type: workout_type.code(),
                expected,
                actual: data.len(),
            }),
        }
    }

    /// Workout type of this record
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running(_) => WorkoutType::Running,
            Self::SportsWalking(_) => WorkoutType::SportsWalking,
            Self::Swimming(_) => WorkoutType::Swimming,
        }
    }

    /// Shared fields of this record
    #[must_use]
    pub const fn base(&self) -> &WorkoutBase {
        match self {
            Self::Running(running) => &running.base,
            Self::SportsWalking(walking) => &walking.base,
            Self::Swimming(swimming) => &swimming.base,
        }
    }
}

impl From<Running> for WorkoutRecord {
    fn from(running: Running) -> Self {
        Self::Running(running)
    }
}

impl From<SportsWalking> for WorkoutRecord {
    fn from(walking: SportsWalking) -> Self {
        Self::SportsWalking(walking)
    }
}

impl From<Swimming> for WorkoutRecord {
    fn from(swimming: Swimming) -> Self {
        Self::Swimming(swimming)
    }
}

/// Convert an action reading into a count
///
/// Only whole readings bind; the sign and magnitude are not checked.
fn action_count(value: f64) -> Result<i64, WorkoutError> {
    // i64::MAX as f64 rounds up to 2^63, which no longer fits
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(WorkoutError::InvalidAction { value })
    }
}
