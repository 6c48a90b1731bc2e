// ABOUTME: Domain error types raised while dispatching and calculating workouts
// ABOUTME: Carries the offending code or counts so callers can report precisely
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ErrorCode;
use serde_json::json;
use thiserror::Error;

/// Errors specific to building workout records and reports.
///
/// Converted into `AppError` at the batch boundary, keeping the structured
/// fields as error details.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// The type code is not one of the known workouts
    #[error("Unknown workout type: '{code}'. Valid options: SWM, RUN, WLK")]
    UnknownWorkoutType {
        /// The unrecognized code, as received
        code: String,
    },

    /// Positional readings do not match the workout's fields
    #[error("{workout_type} expects {expected} readings, got {actual}")]
    ArgumentCount {
        /// Type code of the workout being built
        workout_type: &'static str,
        /// Number of fields the workout declares
        expected: usize,
        /// Number of readings supplied
        actual: usize,
    },

    /// The action reading is not a whole number
    #[error("Action count must be a whole number, got {value}")]
    InvalidAction {
        /// The rejected reading
        value: f64,
    },

    /// A calculation was invoked on a record that does not define it
    #[error("{operation}() must be defined for {training_type}")]
    NotImplemented {
        /// Name of the missing operation
        operation: &'static str,
        /// Training label of the record it was invoked on
        training_type: &'static str,
    },
}

impl WorkoutError {
    /// Standard error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownWorkoutType { .. } => ErrorCode::InvalidInput,
            Self::ArgumentCount { .. } => ErrorCode::ArgumentCount,
            Self::InvalidAction { .. } => ErrorCode::InvalidFormat,
            Self::NotImplemented { .. } => ErrorCode::NotImplemented,
        }
    }

    /// Structured details for error responses
    #[must_use]
    pub fn details(&self) -> serde_json::Value {
        match self {
            Self::UnknownWorkoutType { code } => json!({ "code": code }),
            Self::ArgumentCount {
                workout_type,
                expected,
                actual,
            } => json!({
                "workout_type": workout_type,
                "expected": expected,
                "actual": actual,
            }),
            Self::InvalidAction { value } => json!({ "value": value }),
            Self::NotImplemented {
                operation,
                training_type,
            } => json!({
                "operation": operation,
                "training_type": training_type,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_workout_type_message_names_code() {
        let error = WorkoutError::UnknownWorkoutType {
            code: "FOO".to_owned(),
        };
        assert!(error.to_string().contains("'FOO'"));
        assert_eq!(error.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_argument_count_message() {
        let error = WorkoutError::ArgumentCount {
            workout_type: "SWM",
            expected: 5,
            actual: 3,
        };
        assert_eq!(error.to_string(), "SWM expects 5 readings, got 3");
    }
}
