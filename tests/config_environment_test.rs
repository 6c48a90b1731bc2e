// ABOUTME: Unit tests for environment-driven tracker and logging configuration
// ABOUTME: Validates WORKOUT_* variable parsing, defaults, and fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use workout_tracker::config::{BatchPolicy, TrackerConfig};
use workout_tracker::formatters::OutputFormat;
use workout_tracker::logging::{LogFormat, LoggingConfig};

const TRACKER_VARS: [&str; 3] = [
    "WORKOUT_OUTPUT_FORMAT",
    "WORKOUT_BATCH_POLICY",
    "WORKOUT_PARALLEL",
];

fn clear_tracker_vars() {
    for key in TRACKER_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_batch_policy_parsing() {
    assert_eq!(
        BatchPolicy::from_str_or_default("continue"),
        BatchPolicy::ContinueOnError
    );
    assert_eq!(
        BatchPolicy::from_str_or_default("CONTINUE_ON_ERROR"),
        BatchPolicy::ContinueOnError
    );
    assert_eq!(
        BatchPolicy::from_str_or_default("halt"),
        BatchPolicy::HaltOnError
    );
    assert_eq!(
        BatchPolicy::from_str_or_default("invalid"),
        BatchPolicy::HaltOnError
    ); // Default fallback
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_tracker_vars();

    let config = TrackerConfig::from_env();

    assert_eq!(config, TrackerConfig::default());
    assert_eq!(config.output_format, OutputFormat::Text);
    assert_eq!(config.batch_policy, BatchPolicy::HaltOnError);
    assert!(!config.parallel);
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_tracker_vars();
    env::set_var("WORKOUT_OUTPUT_FORMAT", "json");
    env::set_var("WORKOUT_BATCH_POLICY", "continue");
    env::set_var("WORKOUT_PARALLEL", "true");

    let config = TrackerConfig::from_env();
    clear_tracker_vars();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.batch_policy, BatchPolicy::ContinueOnError);
    assert!(config.parallel);
}

#[test]
#[serial]
fn test_from_env_parallel_disabled_values() {
    clear_tracker_vars();
    for value in ["false", "0"] {
        env::set_var("WORKOUT_PARALLEL", value);
        assert!(!TrackerConfig::from_env().parallel, "{value}");
    }
    clear_tracker_vars();
}

#[test]
#[serial]
fn test_from_env_unrecognized_parallel_values_stay_off() {
    clear_tracker_vars();
    for value in ["FALSE", "no", "off", "bogus"] {
        env::set_var("WORKOUT_PARALLEL", value);
        assert!(!TrackerConfig::from_env().parallel, "{value}");
    }
    env::set_var("WORKOUT_PARALLEL", "TRUE");
    assert!(TrackerConfig::from_env().parallel);
    clear_tracker_vars();
}

#[test]
#[serial]
fn test_logging_from_env() {
    env::set_var("RUST_LOG", "warn");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "workout-tracker");
}
