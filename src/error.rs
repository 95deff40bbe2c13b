//! Error types for the Pay Equity Statistical Analysis Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The analysis core itself is total over validated input and never fails;
//! every error here is a boundary-validation rejection raised before the
//! core runs.

use thiserror::Error;

/// The main error type for the Pay Equity Statistical Analysis Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use equity_engine::error::EngineError;
///
/// let error = EngineError::InvalidJob {
///     job_number: 12,
///     message: "title must not be empty".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid job 12: title must not be empty");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A job record contained invalid data.
    #[error("Invalid job {job_number}: {message}")]
    InvalidJob {
        /// The job number of the invalid record.
        job_number: u32,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A benefits contribution entry contained invalid data.
    #[error("Invalid contribution for job {job_number}: {message}")]
    InvalidContribution {
        /// The job number the contribution refers to.
        job_number: u32,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// The comparable value range was invalid.
    #[error("Invalid comparable value range: {message}")]
    InvalidRange {
        /// A description of what made the range invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
