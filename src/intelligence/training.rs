// ABOUTME: Distance, mean speed, and calorie calculations for each workout type
// ABOUTME: Training trait with shared defaults overridden per workout record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Calculations
//!
//! Every workout derives distance from its action count and step length, and
//! mean speed from distance over duration. Swimming replaces both the step
//! length (one stroke) and the speed formula (pool lengths swum). Calories are
//! specific to each workout; the base record has no calorie formula and
//! reports `WorkoutError::NotImplemented`.

use super::records::{Running, SportsWalking, Swimming, WorkoutBase, WorkoutRecord};
use crate::constants::formulas::{running, swimming, walking, DEFAULT_STEP_LENGTH_M};
use crate::constants::{METERS_PER_KM, MINUTES_PER_HOUR};
use crate::errors::WorkoutError;
use crate::models::{SummaryReport, WorkoutType};

/// Calculations shared by all workouts
pub trait Training {
    /// Distance covered per action, in meters
    const LEN_STEP: f64 = DEFAULT_STEP_LENGTH_M;

    /// Shared fields of the workout
    fn base(&self) -> &WorkoutBase;

    /// Label used in the summary report
    fn training_type(&self) -> &'static str;

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        self.base().action as f64 * Self::LEN_STEP / METERS_PER_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration
    }

    /// Calories spent during the workout
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::NotImplemented` unless the workout defines a
    /// calorie formula
    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        Err(WorkoutError::NotImplemented {
            operation: "spent_calories",
            training_type: self.training_type(),
        })
    }

    /// Summary report with distance, mean speed, and calories
    ///
    /// # Errors
    ///
    /// Propagates the calorie calculation error
    fn show_training_info(&self) -> Result<SummaryReport, WorkoutError> {
        let distance = self.distance();
        let speed = self.mean_speed();
        let calories = self.spent_calories()?;
        Ok(SummaryReport::new(
            self.training_type(),
            self.base().duration,
            distance,
            speed,
            calories,
        ))
    }
}

impl Training for WorkoutBase {
    fn base(&self) -> &WorkoutBase {
        self
    }

    fn training_type(&self) -> &'static str {
        "Training"
    }
}

impl Training for Running {
    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::Running.label()
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        Ok((running::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            + running::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / METERS_PER_KM
            * self.base.duration
            * MINUTES_PER_HOUR)
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::SportsWalking.label()
    }

    // The speed/height term is floor-divided, not divided.
    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let speed_height_ratio =
            floor_div(self.mean_speed().powi(walking::SPEED_EXPONENT), self.height);
        Ok((walking::CALORIES_WEIGHT_MULTIPLIER * self.base.weight
            + speed_height_ratio * walking::CALORIES_SPEED_HEIGHT_MULTIPLIER * self.base.weight)
            * MINUTES_PER_HOUR
            * self.base.duration)
    }
}

impl Training for Swimming {
    const LEN_STEP: f64 = swimming::STROKE_LENGTH_M;

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn training_type(&self) -> &'static str {
        WorkoutType::Swimming.label()
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / METERS_PER_KM / self.base.duration
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        Ok(
            (self.mean_speed() + swimming::CALORIES_MEAN_SPEED_SHIFT)
                * swimming::CALORIES_WEIGHT_MULTIPLIER
                * self.base.weight,
        )
    }
}

impl WorkoutRecord {
    /// Distance in kilometers
    #[must_use]
    pub fn distance(&self) -> f64 {
        match self {
            Self::Running(running) => running.distance(),
            Self::SportsWalking(walking) => walking.distance(),
            Self::Swimming(swimming) => swimming.distance(),
        }
    }

    /// Mean speed in km/h
    #[must_use]
    pub fn mean_speed(&self) -> f64 {
        match self {
            Self::Running(running) => running.mean_speed(),
            Self::SportsWalking(walking) => walking.mean_speed(),
            Self::Swimming(swimming) => swimming.mean_speed(),
        }
    }

    /// Calories spent during the workout
    ///
    /// # Errors
    ///
    /// Propagates the workout's calorie calculation error
    pub fn spent_calories(&self) -> Result<f64, WorkoutError> {
        match self {
            Self::Running(running) => running.spent_calories(),
            Self::SportsWalking(walking) => walking.spent_calories(),
            Self::Swimming(swimming) => swimming.spent_calories(),
        }
    }

    /// Label used in the summary report
    #[must_use]
    pub fn training_type(&self) -> &'static str {
        match self {
            Self::Running(running) => running.training_type(),
            Self::SportsWalking(walking) => walking.training_type(),
            Self::Swimming(swimming) => swimming.training_type(),
        }
    }
}

/// Floor division with the remainder taking the divisor's sign
///
/// Computed from the remainder rather than as `floor(a / b)`, so quotients
/// that round up to a whole number in `a / b` still floor correctly.
#[must_use]
pub fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }
    if quotient == 0.0 {
        return (0.0_f64).copysign(dividend / divisor);
    }
    let floored = quotient.floor();
    if quotient - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
