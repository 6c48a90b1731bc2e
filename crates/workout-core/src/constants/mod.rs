// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, per-workout formula coefficients, and workout codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Formula coefficients are grouped by the workout that uses them so each
//! calorie formula reads against a single namespace.

/// Unit conversion and measurement constants
pub mod units;

/// Calorie and distance coefficients per workout type
pub mod formulas;

pub use units::*;

/// Short type codes accepted by the dispatcher
pub mod workout_codes {
    /// Running
    pub const RUNNING: &str = "RUN";
    /// Sports walking
    pub const SPORTS_WALKING: &str = "WLK";
    /// Swimming
    pub const SWIMMING: &str = "SWM";
}

/// Service names for structured logging
pub mod service_names {
    /// Workout tracker service
    pub const WORKOUT_TRACKER: &str = "workout-tracker";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Output format (`text`, `json`, `toon`)
    pub const OUTPUT_FORMAT: &str = "WORKOUT_OUTPUT_FORMAT";
    /// Batch failure policy (`halt`, `continue`)
    pub const BATCH_POLICY: &str = "WORKOUT_BATCH_POLICY";
    /// Process packages in parallel (`true`, `false`)
    pub const PARALLEL: &str = "WORKOUT_PARALLEL";
}
