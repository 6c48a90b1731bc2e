// ABOUTME: Main library entry point for the workout tracker
// ABOUTME: Turns workout type codes and sensor readings into summary reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! Computes distance, mean speed, and calories for running, sports walking,
//! and swimming workouts from raw readings (step or stroke counts, duration,
//! weight, and type-specific parameters), and renders a summary per workout.
//!
//! ## Architecture
//!
//! - **Intelligence**: workout records and their calculations
//! - **Dispatch**: type code to record, positional readings to fields
//! - **Report**: summary report and message rendering
//! - **Batch**: processing a list of packages with a failure policy
//!
//! ## Example Usage
//!
//! ```rust
//! use workout_tracker::dispatch::read_package;
//! use workout_tracker::report::{build_report, format_message};
//!
//! let record = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! let report = build_report(&record)?;
//! assert!(format_message(&report).starts_with("Тип тренировки: Running;"));
//! # Ok::<(), workout_tracker::errors::WorkoutError>(())
//! ```

/// Batch processing with halt or continue failure policies
pub mod batch;

/// Environment-driven configuration
pub mod config;

/// Type-code dispatch and package parsing
pub mod dispatch;

/// Output formats for summary reports
pub mod formatters;

/// Workout records and calculations
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Summary report building and message rendering
pub mod report;

// Re-export foundation modules so paths stay `crate::errors`, `crate::models`, ...
pub use workout_core::{constants, errors, models};
