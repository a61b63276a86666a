use axum::{Json, extract::State};
use lessonbook_core::models::reference::{Classroom, Discipline, StudyGroup, Teacher};
use std::sync::Arc;

use crate::ApiState;

pub async fn list_groups(State(state): State<Arc<ApiState>>) -> Json<Vec<StudyGroup>> {
    Json(state.references.groups().into_iter().cloned().collect())
}

pub async fn list_teachers(State(state): State<Arc<ApiState>>) -> Json<Vec<Teacher>> {
    Json(state.references.teachers().into_iter().cloned().collect())
}

pub async fn list_classrooms(State(state): State<Arc<ApiState>>) -> Json<Vec<Classroom>> {
    Json(state.references.classrooms().into_iter().cloned().collect())
}

pub async fn list_disciplines(State(state): State<Arc<ApiState>>) -> Json<Vec<Discipline>> {
    Json(state.references.disciplines().into_iter().cloned().collect())
}
