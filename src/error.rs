//! Error types for the syllabus engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all hard failure conditions that can occur during a document build.
//!
//! Recoverable conditions (a data table that fails to load, an empty
//! table, a semester code that does not match the expected pattern) are
//! deliberately NOT errors; they are reported as
//! [`LoadWarning`](crate::models::LoadWarning) values on the load report.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the syllabus engine.
///
/// All fallible operations in the engine return this error type, making
/// it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use syllabus_engine::error::SyllabusError;
///
/// let error = SyllabusError::FileNotFound {
///     path: "/missing/course.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Course configuration file not found: /missing/course.yaml"
/// );
/// ```
#[derive(Debug, Clone, Error)]
pub enum SyllabusError {
    /// Course configuration file was not found at the specified path.
    #[error("Course configuration file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Course configuration file could not be parsed.
    #[error("Failed to parse course configuration '{path}': {message}")]
    ParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required section or field was missing from the configuration.
    ///
    /// Only raised in strict mode; non-strict loads record the same
    /// condition as a failing check message on the report.
    #[error("Schema violation at '{field}': {message}")]
    SchemaViolation {
        /// The dotted path of the missing section or field
        /// (e.g. "instructor" or "course.code").
        field: String,
        /// A description of what was missing.
        message: String,
    },

    /// A date field did not match the expected ISO calendar format.
    #[error("Invalid date in field '{field}': '{value}' (expected YYYY-MM-DD)")]
    DateFormatError {
        /// The dotted path of the offending field.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The course start date was not before the end date.
    #[error("Course start date {start} is not before end date {end}")]
    DateOrderError {
        /// The parsed start date.
        start: NaiveDate,
        /// The parsed end date.
        end: NaiveDate,
    },

    /// A rendering helper was called with unusable arguments.
    #[error("Render error: {message}")]
    RenderError {
        /// A description of the misuse.
        message: String,
    },
}

/// A type alias for Results that return SyllabusError.
pub type SyllabusResult<T> = Result<T, SyllabusError>;
