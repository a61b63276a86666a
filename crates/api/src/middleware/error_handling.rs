//! # Error Handling Middleware
//!
//! Maps booking errors to HTTP status codes and JSON error bodies so every
//! handler reports failures the same way.
//!
//! Rejected lessons are not errors and never pass through here; the lesson
//! handler answers them with `409 Conflict` itself.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lessonbook_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use lessonbook_api::middleware::error_handling::AppError;
/// use lessonbook_core::errors::BookingError;
///
/// async fn handler(start: u32, end: u32) -> Result<Json<u32>, AppError> {
///     if start >= end {
///         return Err(AppError(BookingError::validation("start must be before end")));
///     }
///     Ok(Json(end - start))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows using `?` on `BookingResult` inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}
