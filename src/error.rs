//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during scheduling, payroll
//! computation, and entity management.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the roster engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or contained invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: Uuid,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// An input field failed validation.
    #[error("Invalid value for field '{field}': {message}")]
    ValidationError {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No guard exists with the given ID.
    #[error("Guard not found: {guard_id}")]
    GuardNotFound {
        /// The ID that was looked up.
        guard_id: Uuid,
    },

    /// No building exists with the given ID.
    #[error("Building not found: {building_id}")]
    BuildingNotFound {
        /// The ID that was looked up.
        building_id: Uuid,
    },

    /// No shift exists with the given ID.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The ID that was looked up.
        shift_id: Uuid,
    },

    /// A guard with the same email address already exists.
    #[error("A guard with email '{email}' already exists")]
    DuplicateEmail {
        /// The conflicting email address.
        email: String,
    },

    /// The guard cannot take the shift (wrong status or outside contract).
    #[error("Guard {guard_id} is not eligible: {message}")]
    IneligibleGuard {
        /// The guard that was rejected.
        guard_id: Uuid,
        /// Why the guard cannot take the shift.
        message: String,
    },

    /// The shift would violate the guard's minimum rest separation.
    #[error("Guard {guard_id} would have less than {minimum_hours} hours of rest")]
    InsufficientRest {
        /// The guard whose rest window is violated.
        guard_id: Uuid,
        /// The configured minimum rest in hours.
        minimum_hours: i64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
