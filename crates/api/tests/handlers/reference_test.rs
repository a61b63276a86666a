use lessonbook_core::repository::MemoryScheduleRepository;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{server, server_with_state};

#[rstest]
#[case("/api/groups", json!([{ "id": 1, "name": "G1" }, { "id": 2, "name": "G2" }]))]
#[case("/api/teachers", json!([{ "id": 1, "full_name": "T1" }, { "id": 2, "full_name": "T2" }]))]
#[case("/api/classrooms", json!([{ "id": 1, "number": "R1" }, { "id": 2, "number": "R2" }]))]
#[case("/api/disciplines", json!([{ "id": 1, "name": "History" }]))]
#[tokio::test]
async fn test_reference_lists(#[case] path: &str, #[case] expected: Value) {
    let server = server();

    let body: Value = server.get(path).await.json();

    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_reference_lists_do_not_wait_for_session() {
    let (server, state) = server_with_state(MemoryScheduleRepository::new());
    let _held = state.session.lock().await;

    let body: Value = server.get("/api/groups").await.json();

    assert_eq!(body, json!([{ "id": 1, "name": "G1" }, { "id": 2, "name": "G2" }]));
}
