use std::sync::Arc;

use axum_test::TestServer;
use lessonbook_api::{ApiState, app};
use lessonbook_core::{
    models::reference::{
        Classroom, ClassroomId, Discipline, DisciplineId, GroupId, ReferenceData, StudyGroup,
        Teacher, TeacherId,
    },
    repository::{MemoryScheduleRepository, ScheduleRepository},
};
use serde_json::{Value, json};

/// Two of every resource: groups G1/G2, teachers T1/T2, rooms R1/R2.
pub fn references() -> ReferenceData {
    ReferenceData::new(
        [
            StudyGroup {
                id: GroupId(1),
                name: "G1".to_string(),
            },
            StudyGroup {
                id: GroupId(2),
                name: "G2".to_string(),
            },
        ],
        [
            Teacher {
                id: TeacherId(1),
                full_name: "T1".to_string(),
            },
            Teacher {
                id: TeacherId(2),
                full_name: "T2".to_string(),
            },
        ],
        [
            Classroom {
                id: ClassroomId(1),
                number: "R1".to_string(),
            },
            Classroom {
                id: ClassroomId(2),
                number: "R2".to_string(),
            },
        ],
        [Discipline {
            id: DisciplineId(1),
            name: "History".to_string(),
        }],
    )
}

/// Builds a server and hands back its state so a test can hold the session.
pub fn server_with_state(
    repository: impl ScheduleRepository + 'static,
) -> (TestServer, Arc<ApiState>) {
    let state = Arc::new(ApiState::new(repository, references()));
    let server = TestServer::new(app(Arc::clone(&state))).expect("Failed to build test server");
    (server, state)
}

pub fn server_with(repository: impl ScheduleRepository + 'static) -> TestServer {
    server_with_state(repository).0
}

pub fn server() -> TestServer {
    server_with(MemoryScheduleRepository::new())
}

pub fn lesson_form(start: &str, end: &str, group: i32, teacher: i32, room: i32) -> Value {
    json!({
        "date": "2024-09-01",
        "start_time": start,
        "end_time": end,
        "group_id": group,
        "teacher_id": teacher,
        "classroom_id": room,
        "discipline_id": 1,
    })
}
