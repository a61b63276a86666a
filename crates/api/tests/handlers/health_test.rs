use axum::http::StatusCode;
use lessonbook_core::repository::MemoryScheduleRepository;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::test_utils::{lesson_form, server, server_with_state};

#[tokio::test]
async fn test_health_reports_pending_lessons() {
    let server = server();
    server
        .post("/api/lessons")
        .json(&lesson_form("09:00", "10:30", 1, 1, 1))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/health").await.json();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["pending_lessons"], 1);
}

#[tokio::test]
async fn test_version() {
    let body: Value = server().get("/version").await.json();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_answers_while_session_is_busy() {
    let (server, state) = server_with_state(MemoryScheduleRepository::new());
    let _held = state.session.lock().await;

    let body: Value = server.get("/health").await.json();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["pending_lessons"], Value::Null);
}
