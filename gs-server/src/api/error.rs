//! API error types
//!
//! Every handler-local condition maps to exactly one HTTP status; the
//! response is the whole error surface. Bodies are plain text.

use gs_auth::AuthError;
use gs_db::DbError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unverifiable credential, or caller lacks membership (403)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Missing required parameter (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown invite token (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Stored record is missing a field it must have (500)
    #[error("Inconsistent state: {message} {location}")]
    InconsistentState {
        message: String,
        location: ErrorLocation,
    },

    /// Store fault (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, "Unauthorized".to_string()),
            ApiError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            ApiError::InconsistentState { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error".to_string(),
            ),
        };

        (status, body).into_response()
    }
}

/// Any credential failure collapses to 403; the variant detail stays in the
/// log only.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert store errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
