use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/groups", get(handlers::reference::list_groups))
        .route("/api/teachers", get(handlers::reference::list_teachers))
        .route("/api/classrooms", get(handlers::reference::list_classrooms))
        .route("/api/disciplines", get(handlers::reference::list_disciplines))
}
