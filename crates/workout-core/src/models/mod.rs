// ABOUTME: Core data models shared by the calculation and reporting layers
// ABOUTME: Re-exports the workout type enumeration and the summary report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Summary report produced for each workout
pub mod report;
/// Workout type enumeration and type-code mapping
pub mod workout_type;

pub use report::SummaryReport;
pub use workout_type::WorkoutType;
