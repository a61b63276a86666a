use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/lessons",
            get(handlers::lesson::list_lessons).post(handlers::lesson::add_lesson),
        )
        .route("/api/lessons/save", post(handlers::lesson::save))
}
