//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "<message>"}` bodies with
//! appropriate status codes. Store failures are logged, never echoed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::validation::capitalize;
use crate::models::ValidationError;

/// Body message for undecodable JSON
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// Body message for a path id that isn't a positive integer
pub const INVALID_USER_ID: &str = "Invalid user ID";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request (400)
    BadRequest { message: &'static str },

    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Store operation failed (500, logged)
    Database {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Map a store error, keeping not-found as 404 and reporting
    /// everything else as a 500 with `message`.
    pub fn from_db(err: DbError, message: &'static str) -> Self {
        match err {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            source => Self::Database { message, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::BadRequest { message } => (*message).to_owned(),
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource, .. } => format!("{} not found", capitalize(resource)),
            Self::Database { message, .. } => (*message).to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database { message, source } => {
                // Log the actual error, return generic message
                tracing::error!(error = %source, "{}", message);
            }
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "not found");
            }
            _ => {}
        }

        let body = Json(json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
