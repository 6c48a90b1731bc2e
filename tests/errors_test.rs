// ABOUTME: Integration tests for application and domain error types
// ABOUTME: Checks error codes, exit codes, and serialized error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_tracker::errors::{AppError, ErrorCode, ErrorResponse, WorkoutError};

#[test]
fn test_workout_error_codes() {
    assert_eq!(
        WorkoutError::UnknownWorkoutType {
            code: "FOO".to_owned()
        }
        .code(),
        ErrorCode::InvalidInput
    );
    assert_eq!(
        WorkoutError::InvalidAction { value: 1.5 }.code(),
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        WorkoutError::NotImplemented {
            operation: "spent_calories",
            training_type: "Training"
        }
        .code(),
        ErrorCode::NotImplemented
    );
}

#[test]
fn test_exit_codes() {
    assert_eq!(ErrorCode::InvalidInput.exit_code(), 2);
    assert_eq!(ErrorCode::ArgumentCount.exit_code(), 2);
    assert_eq!(ErrorCode::NotImplemented.exit_code(), 1);
}

#[test]
fn test_with_detail_accumulates() {
    let error = AppError::invalid_input("bad package")
        .with_detail("package_index", 2)
        .with_detail("package", "RUN:1");

    assert_eq!(error.details["package_index"], 2);
    assert_eq!(error.details["package"], "RUN:1");
}

#[test]
fn test_error_response_serialization() {
    let error = AppError::from(WorkoutError::UnknownWorkoutType {
        code: "FOO".to_owned(),
    });
    let response = ErrorResponse::from(&error);

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("INVALID_INPUT"));
    assert!(json.contains("\"code\":\"FOO\""));
}

#[test]
fn test_error_response_omits_empty_details() {
    let response = ErrorResponse::from(&AppError::internal("oops"));
    let json = serde_json::to_string(&response).unwrap();
    assert!(!json.contains("details"));
}
