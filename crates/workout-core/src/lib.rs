// ABOUTME: Core types and constants for the workout tracker
// ABOUTME: Foundation crate with error handling, formula constants, and report models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! tracker. It holds everything the calculation and reporting layers agree on
//! and is expected to change rarely.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the domain `WorkoutError`
//! - **constants**: unit conversions and per-workout formula coefficients
//! - **models**: `WorkoutType` and the `SummaryReport` produced for each workout

/// Unified error handling with standard error codes and domain errors
pub mod errors;

/// Unit conversions and formula coefficients organized by workout type
pub mod constants;

/// Core data models (`WorkoutType`, `SummaryReport`)
pub mod models;
