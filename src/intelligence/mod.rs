// ABOUTME: Intelligence module with workout records and their calculations
// ABOUTME: Re-exports the record types and the Training trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Workout records and the distance, mean speed, and calorie calculations
//! that turn raw readings into a summary report.

/// Workout record types and positional construction
pub mod records;
/// Distance, mean speed, and calorie calculations
pub mod training;

pub use records::{Running, SportsWalking, Swimming, WorkoutBase, WorkoutRecord};
pub use training::{floor_div, Training};
