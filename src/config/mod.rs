// ABOUTME: Environment-driven configuration for output format and batch behavior
// ABOUTME: Reads WORKOUT_* variables with safe fallbacks to the defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is environment-only; the binary's flags override it.

use crate::constants::env_config;
use crate::formatters::OutputFormat;
use std::env;

/// What the batch runner does when a package fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failing package
    #[default]
    HaltOnError,
    /// Log the failure and keep processing the remaining packages
    ContinueOnError,
}

impl BatchPolicy {
    /// Parse policy from string parameter (case-insensitive)
    /// Returns `HaltOnError` for unrecognized values
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "continue" | "continue_on_error" | "skip" => Self::ContinueOnError,
            _ => Self::HaltOnError,
        }
    }
}

/// Workout tracker configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Format of the printed reports
    pub output_format: OutputFormat,
    /// Failure handling for batches
    pub batch_policy: BatchPolicy,
    /// Compute packages in parallel
    pub parallel: bool,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_format = lookup(env_config::OUTPUT_FORMAT)
            .map(|value| OutputFormat::from_str_param(&value))
            .unwrap_or_default();
        let batch_policy = lookup(env_config::BATCH_POLICY)
            .map(|value| BatchPolicy::from_str_or_default(&value))
            .unwrap_or_default();
        let parallel = lookup(env_config::PARALLEL)
            .is_some_and(|value| parse_flag(&value));

        Self {
            output_format,
            batch_policy,
            parallel,
        }
    }
}

/// `true`/`1` enable a flag; anything else leaves it off
fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_lookup_reads_all_keys() {
        let vars: HashMap<&str, &str> = [
            ("WORKOUT_OUTPUT_FORMAT", "JSON"),
            ("WORKOUT_BATCH_POLICY", "continue"),
            ("WORKOUT_PARALLEL", "1"),
        ]
        .into_iter()
        .collect();

        let config = TrackerConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned()));

        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.batch_policy, BatchPolicy::ContinueOnError);
        assert!(config.parallel);
    }

    #[test]
    fn test_unknown_values_fall_back_to_defaults() {
        let config = TrackerConfig::from_lookup(|_| Some("bogus".to_owned()));

        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.batch_policy, BatchPolicy::HaltOnError);
        assert!(!config.parallel);
    }

    #[test]
    fn test_parallel_flag_values() {
        for (value, expected) in [
            ("true", true),
            ("TRUE", true),
            (" 1 ", true),
            ("false", false),
            ("FALSE", false),
            ("0", false),
            ("no", false),
            ("off", false),
            ("", false),
        ] {
            let config = TrackerConfig::from_lookup(|key| {
                (key == "WORKOUT_PARALLEL").then(|| value.to_owned())
            });
            assert_eq!(config.parallel, expected, "WORKOUT_PARALLEL={value:?}");
        }
    }
}
