//! Error types for the shift board.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every rejection the scheduling core can produce, plus the opaque
//! storage failures it propagates from its collaborators.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::StoreError;

/// The main error type for the shift board.
///
/// Validation failures (`EmployeeNotFound`, `InvalidDuration`,
/// `DuplicateShiftForDay`) carry enough detail to explain the rejection to
/// the caller. Storage failures are wrapped unchanged.
///
/// # Example
///
/// ```
/// use shift_board::error::SchedulingError;
///
/// let error = SchedulingError::EmployeeNotFound { employee_id: 42 };
/// assert_eq!(error.to_string(), "Employee with ID 42 not found");
/// ```
#[derive(Debug, Error)]
pub enum SchedulingError {
    /// The referenced employee does not exist.
    #[error("Employee with ID {employee_id} not found")]
    EmployeeNotFound {
        /// The employee identifier that failed to resolve.
        employee_id: i64,
    },

    /// The resolved shift length is below the minimum.
    #[error("Shift duration must be at least 4 hours. Current duration: {hours} hours")]
    InvalidDuration {
        /// The computed duration in hours, after overnight wraparound.
        hours: Decimal,
    },

    /// The employee already has a shift on the requested date.
    #[error(
        "Employee {employee_id} already has a shift assigned on {date}. Only one shift per employee per day is allowed."
    )]
    DuplicateShiftForDay {
        /// The employee identifier.
        employee_id: i64,
        /// The conflicting calendar date.
        date: NaiveDate,
    },

    /// No shift exists with the requested identifier.
    #[error("Shift with ID {id} not found")]
    ShiftNotFound {
        /// The shift identifier that failed to resolve.
        id: i64,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A storage collaborator failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return SchedulingError.
pub type SchedulingResult<T> = Result<T, SchedulingError>;
