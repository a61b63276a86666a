use axum::http::StatusCode;
use eyre::eyre;
use lessonbook_core::errors::BookingError;
use lessonbook_db::mock::repositories::MockScheduleRepo;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{lesson_form, server, server_with};

#[test_log::test(tokio::test)]
async fn test_add_lesson_to_empty_schedule() {
    let server = server();

    let response = server
        .post("/api/lessons")
        .json(&lesson_form("09:00", "10:30", 1, 1, 1))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["status"], "admitted");
    assert_eq!(body["lesson"]["start_time"], "09:00:00");
    assert_eq!(body["lesson"]["lesson_type"], "Lecture");
}

#[rstest]
#[case::group(lesson_form("10:00", "11:00", 1, 2, 2), "group")]
#[case::teacher(lesson_form("09:30", "10:00", 2, 1, 2), "teacher")]
#[case::classroom(lesson_form("09:15", "09:45", 2, 2, 1), "classroom")]
#[tokio::test]
async fn test_conflicting_lesson_is_rejected(#[case] form: Value, #[case] conflict: &str) {
    let server = server();
    server
        .post("/api/lessons")
        .json(&lesson_form("09:00", "10:30", 1, 1, 1))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.post("/api/lessons").json(&form).await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["status"], "rejected");
    assert_eq!(body["conflict"], conflict);
    assert!(body["message"].as_str().unwrap().contains(conflict));
}

#[tokio::test]
async fn test_lesson_touching_previous_one_is_admitted() {
    let server = server();
    server
        .post("/api/lessons")
        .json(&lesson_form("09:00", "10:30", 1, 1, 1))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/lessons")
        .json(&lesson_form("10:30", "11:30", 1, 1, 1))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[rstest]
#[case::inverted(lesson_form("10:00", "09:00", 1, 1, 1))]
#[case::unknown_teacher(lesson_form("09:00", "10:00", 1, 9, 1))]
#[case::bad_time(lesson_form("nine", "10:00", 1, 1, 1))]
#[case::missing_field(json!({ "date": "2024-09-01", "start_time": "09:00" }))]
#[tokio::test]
async fn test_invalid_lesson_is_bad_request(#[case] form: Value) {
    let server = server();

    let response = server.post("/api/lessons").json(&form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));

    let lessons: Value = server.get("/api/lessons").await.json();
    assert_eq!(lessons["lessons"], json!([]));
}

#[tokio::test]
async fn test_list_and_save_lessons() {
    let server = server();
    server
        .post("/api/lessons")
        .json(&lesson_form("09:00", "10:30", 1, 1, 1))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post("/api/lessons")
        .json(&lesson_form("09:00", "10:30", 2, 2, 2))
        .await
        .assert_status(StatusCode::CREATED);

    let listed: Value = server.get("/api/lessons").await.json();
    assert_eq!(listed["pending"], 2);
    assert_eq!(listed["lessons"][0]["id"], Value::Null);

    let saved: Value = server.post("/api/lessons/save").await.json();
    assert_eq!(saved, json!({ "saved": 2 }));

    let listed: Value = server.get("/api/lessons").await.json();
    assert_eq!(listed["pending"], 0);
    assert_eq!(listed["lessons"][0]["id"], 1);
    assert_eq!(listed["lessons"][1]["id"], 2);
}

#[tokio::test]
async fn test_failed_save_reports_cause() {
    let mut repo = MockScheduleRepo::new();
    repo.expect_pending_count().return_const(1usize);
    repo.expect_commit().returning(|| {
        Err(BookingError::Persistence(
            eyre!("connection refused").wrap_err("Failed to open transaction"),
        ))
    });
    let server = server_with(repo);

    let response = server.post("/api/lessons/save").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Persistence error: Failed to open transaction: connection refused"
    );
}

#[rstest]
#[case::impossible_date("date", json!("2024-09-31"))]
#[case::non_integer_id("group_id", json!("G1"))]
#[case::mistyped_time("start_time", json!(900))]
#[tokio::test]
async fn test_malformed_field_is_bad_request(#[case] field: &str, #[case] value: Value) {
    let server = server();
    let mut form = lesson_form("09:00", "10:30", 1, 1, 1);
    form[field] = value;

    let response = server.post("/api/lessons").json(&form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
    assert!(body["error"].as_str().unwrap().contains(field));
}
