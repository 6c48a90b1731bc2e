// ABOUTME: Output format abstraction for rendering workout summary reports
// ABOUTME: Supports plain text messages (default), JSON, and TOON behind a feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Reports are printed one message per line by default. JSON and TOON carry
//! the raw metrics alongside the message for machine consumers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workout_tracker::formatters::{format_reports, OutputFormat};
//!
//! let output = format_reports(&reports, OutputFormat::Json)?;
//! println!("{}", output.data);
//! ```

use crate::errors::{AppError, ErrorResponse};
use crate::models::SummaryReport;
use serde::Serialize;
use std::fmt;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable message per report (default)
    #[default]
    Text,
    /// JSON array of reports
    Json,
    /// TOON format - Token-Oriented Object Notation
    #[cfg(feature = "toon")]
    Toon,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            #[cfg(feature = "toon")]
            "toon" => Self::Toon,
            _ => Self::Text,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
            #[cfg(feature = "toon")]
            Self::Toon => "application/vnd.toon",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            #[cfg(feature = "toon")]
            Self::Toon => "toon",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

/// Serialized shape of a report: its metrics plus the rendered message
#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
    #[serde(flatten)]
    report: &'a SummaryReport,
    message: String,
}

/// Render summary reports in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON or TOON serialization fails
pub fn format_reports(
    reports: &[SummaryReport],
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => reports
            .iter()
            .map(SummaryReport::message)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => {
            let entries: Vec<ReportEntry<'_>> = reports
                .iter()
                .map(|report| ReportEntry {
                    report,
                    message: report.message(),
                })
                .collect();
            serialize(&entries, format)?
        }
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Render an application error in the requested format
///
/// Text yields the error's display string; JSON and TOON carry the
/// [`ErrorResponse`] body with its code and details.
///
/// # Errors
///
/// Returns `FormatError` if JSON or TOON serialization fails
pub fn format_error(
    error: &AppError,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => error.to_string(),
        _ => serialize(&ErrorResponse::from(error), format)?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

fn serialize<T: Serialize>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text | OutputFormat::Json => {
            serde_json::to_string_pretty(data).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })
        }
        #[cfg(feature = "toon")]
        OutputFormat::Toon => {
            let value = serde_json::to_value(data).map_err(|e| FormatError {
                message: format!("Failed to convert to JSON value: {e}"),
                format,
            })?;
            let options = toon_format::EncodeOptions::default();
            toon_format::encode(&value, &options).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })
        }
    }
}
