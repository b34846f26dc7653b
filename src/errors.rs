/*!
 * Error types for the lexiband application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when computing readability statistics
#[derive(Error, Debug)]
pub enum StatsError {
    /// Error when a passage carries no usable prose
    #[error("Passage '{text_id}' has a blank text body; statistics cannot be computed")]
    BlankTextBody {
        /// Identifier of the offending passage
        text_id: String,
    },
}

/// Errors that can occur while rendering the CSV report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error from the CSV serializer
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// Error flushing the serialized buffer
    #[error("CSV buffer error: {0}")]
    Buffer(#[from] std::io::Error),

    /// Serialized bytes were not valid UTF-8
    #[error("Serialized CSV is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from statistics computation
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Error from report rendering
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
