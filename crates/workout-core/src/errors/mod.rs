// ABOUTME: Unified error handling with standard error codes for the workout tracker
// ABOUTME: Defines AppError, ErrorCode, and re-exports the domain-level WorkoutError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError` is the error surfaced to the batch runner and the binary. The
//! calculation layer reports failures with the narrower [`WorkoutError`], which
//! converts into `AppError` with the matching [`ErrorCode`].

/// Domain errors raised while building workout records and reports
pub mod workout;

pub use workout::WorkoutError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input value is invalid (unknown workout code, malformed package)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Reading count does not match the workout's field count
    #[serde(rename = "ARGUMENT_COUNT")]
    ArgumentCount = 3001,
    /// Value cannot be bound to its typed field
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Operation is not implemented for this workout type
    #[serde(rename = "NOT_IMPLEMENTED")]
    NotImplemented = 9001,
    /// Report serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ArgumentCount => "Wrong number of readings for this workout type",
            Self::InvalidFormat => "The reading cannot be used for this field",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::NotImplemented => "The operation is not implemented",
            Self::SerializationError => "Report serialization failed",
        }
    }

    /// Process exit code used by the binary for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput | Self::ArgumentCount | Self::InvalidFormat => 2,
            Self::ConfigInvalid => 3,
            Self::InternalError | Self::NotImplemented | Self::SerializationError => 1,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (offending code, expected counts, ...)
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a single structured detail, keeping existing ones
    #[must_use]
    pub fn with_detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        if !self.details.is_object() {
            self.details = serde_json::Value::Object(serde_json::Map::new());
        }
        if let serde_json::Value::Object(details) = &mut self.details {
            details.insert(key.to_owned(), value.into());
        }
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid configuration
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<WorkoutError> for AppError {
    fn from(error: WorkoutError) -> Self {
        let code = error.code();
        let details = error.details();
        Self::new(code, error.to_string())
            .with_details(details)
            .with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error body, printed by the binary for structured output formats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
            details: error.details.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_error_conversion_keeps_code() {
        let error = AppError::from(WorkoutError::UnknownWorkoutType {
            code: "FOO".to_owned(),
        });

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.message.contains("FOO"));
        assert_eq!(error.details["code"], "FOO");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::from(WorkoutError::ArgumentCount {
            workout_type: "RUN",
            expected: 3,
            actual: 2,
        });
        let response = ErrorResponse::from(&error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ARGUMENT_COUNT"));
        assert!(json.contains("\"expected\":3"));
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::config("bad value");
        assert_eq!(error.to_string(), "Configuration is invalid: bad value");
        assert_eq!(error.code.exit_code(), 3);
    }
}
