//! Response types for the roster engine API.
//!
//! This module defines the error response structures, the assignment
//! selection body, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::scheduling::SelectedCandidate;

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service health indicator.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
}

/// The selected guard in an assignment response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedGuard {
    /// Identifier of the selected guard.
    pub guard_id: Uuid,
    /// Display name of the selected guard.
    pub full_name: String,
    /// The score the guard won with.
    pub score: i64,
}

/// Response body for the recommend and absence endpoints.
///
/// `selected` is `null` when no candidate is eligible; that outcome is a
/// successful response, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResponse {
    /// The winning candidate, if any.
    pub selected: Option<SelectedGuard>,
}

impl From<SelectedCandidate<'_>> for SelectedGuard {
    fn from(candidate: SelectedCandidate<'_>) -> Self {
        SelectedGuard {
            guard_id: candidate.guard.id,
            full_name: candidate.guard.full_name(),
            score: candidate.score,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidShift { shift_id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    format!("Invalid shift '{}': {}", shift_id, message),
                    "The shift data contains invalid information",
                ),
            },
            EngineError::ValidationError { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid field '{}': {}", field, message),
                    "The request data failed validation",
                ),
            },
            EngineError::GuardNotFound { guard_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "GUARD_NOT_FOUND",
                    format!("Guard not found: {}", guard_id),
                ),
            },
            EngineError::BuildingNotFound { building_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "BUILDING_NOT_FOUND",
                    format!("Building not found: {}", building_id),
                ),
            },
            EngineError::ShiftNotFound { shift_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "SHIFT_NOT_FOUND",
                    format!("Shift not found: {}", shift_id),
                ),
            },
            EngineError::DuplicateEmail { email } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_EMAIL",
                    format!("Email already registered: {}", email),
                    "Guard email addresses must be unique",
                ),
            },
            EngineError::IneligibleGuard { guard_id, message } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INELIGIBLE_GUARD",
                    format!("Guard {} is not eligible: {}", guard_id, message),
                    "The guard cannot take the requested shift",
                ),
            },
            EngineError::InsufficientRest {
                guard_id,
                minimum_hours,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INSUFFICIENT_REST",
                    format!(
                        "Guard {} would have less than {} hours of rest",
                        guard_id, minimum_hours
                    ),
                    "The shift is too close to one of the guard's existing shifts",
                ),
            },
        }
    }
}
