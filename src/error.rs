//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Invalid or missing API keys
/// - **Authorization Errors**: Authenticated caller lacking access to the requested scope
/// - **Resource Errors**: Requested shop, record or user not found
/// - **Validation Errors**: Malformed records or query parameters
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// API key is missing, invalid, or inactive.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Caller is authenticated but may not see or change the resource.
    ///
    /// Returns HTTP 403 Forbidden. A user without staff rights and without an
    /// assigned shop ends up here instead of receiving an empty report.
    #[error("Forbidden")]
    Forbidden(String),

    /// Returns HTTP 404 Not Found.
    #[error("Shop not found")]
    ShopNotFound,

    /// Returns HTTP 404 Not Found.
    #[error("Record not found")]
    RecordNotFound,

    /// Returns HTTP 404 Not Found.
    #[error("User not found")]
    UserNotFound,

    /// A unique value (shop name, username) is already taken.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Conflict")]
    Conflict(String),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

impl AppError {
    /// Turn a unique-constraint violation into `Conflict`, leaving other errors as `Database`.
    pub fn conflict_on_unique(err: sqlx::Error, message: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(message.to_string())
            }
            _ => AppError::Database(err),
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidApiKey` → 401 Unauthorized
/// - `Forbidden` → 403 Forbidden
/// - `ShopNotFound` / `RecordNotFound` / `UserNotFound` → 404 Not Found
/// - `Conflict` → 409 Conflict
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                "invalid_api_key",
                self.to_string(),
            ),
            AppError::Forbidden(ref msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            AppError::ShopNotFound => (StatusCode::NOT_FOUND, "shop_not_found", self.to_string()),
            AppError::RecordNotFound => {
                (StatusCode::NOT_FOUND, "record_not_found", self.to_string())
            }
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "user_not_found", self.to_string()),
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
