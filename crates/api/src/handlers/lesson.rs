//! # Lesson Handlers
//!
//! The "add schedule" and "save" actions of the timetable editor.
//!
//! Adding a lesson runs the booking check and, when it passes, stages the
//! lesson in the shared session. Nothing reaches the database until a save.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use lessonbook_core::{
    admission::Admission,
    errors::BookingError,
    models::lesson::{AddLessonRequest, AddLessonResponse, ListLessonsResponse, SaveResponse},
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Checks a candidate lesson and stages it when nothing clashes.
///
/// # Endpoint
///
/// ```text
/// POST /api/lessons
/// ```
///
/// # Returns
///
/// * `201 Created` with the staged lesson when admitted
/// * `409 Conflict` naming the double-booked resource when rejected
/// * `400 Bad Request` when a field is missing, malformed or unknown
#[axum::debug_handler]
pub async fn add_lesson(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<AddLessonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddLessonResponse>), AppError> {
    // An impossible date or a mistyped id is as much a form error as a missing field.
    let Json(payload) =
        payload.map_err(|rejection| BookingError::Validation(rejection.body_text()))?;
    let candidate = payload.into_candidate()?;

    // The lock spans check and stage so concurrent requests cannot both pass.
    let mut session = state.session.lock().await;
    let admission = session.add_lesson(candidate.clone()).await?;

    let response = match admission {
        Admission::Admitted => (
            StatusCode::CREATED,
            Json(AddLessonResponse::Admitted { lesson: candidate }),
        ),
        Admission::Rejected(conflict) => (
            StatusCode::CONFLICT,
            Json(AddLessonResponse::Rejected {
                conflict,
                message: conflict.to_string(),
            }),
        ),
    };

    Ok(response)
}

/// Lists the working schedule: saved lessons followed by staged ones.
#[axum::debug_handler]
pub async fn list_lessons(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListLessonsResponse>, AppError> {
    let session = state.session.lock().await;
    let lessons = session.lessons().await?;

    Ok(Json(ListLessonsResponse {
        lessons,
        pending: session.pending_count(),
    }))
}

/// Writes every staged lesson to storage.
///
/// On failure the staged lessons are kept, so the client can simply retry.
#[axum::debug_handler]
pub async fn save(State(state): State<Arc<ApiState>>) -> Result<Json<SaveResponse>, AppError> {
    let mut session = state.session.lock().await;
    let saved = session.save().await?;

    Ok(Json(SaveResponse { saved }))
}
