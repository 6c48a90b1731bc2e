// ABOUTME: Distance and calorie coefficients for each workout type
// ABOUTME: Step lengths and the multipliers used by the calorie formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default distance covered per step, in meters
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

/// Running calorie coefficients
pub mod running {
    /// Multiplier applied to mean speed
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Shift added after the speed multiplier
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie coefficients
pub mod walking {
    /// Weight multiplier of the resting term
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight multiplier of the speed/height term
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// Exponent applied to mean speed
    pub const SPEED_EXPONENT: i32 = 2;
}

/// Swimming distance and calorie coefficients
pub mod swimming {
    /// Distance covered per stroke, in meters
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Shift added to mean speed
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to the shifted speed
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}
