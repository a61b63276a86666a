use crate::models::{DbClassroom, DbDiscipline, DbStudyGroup, DbTeacher};
use eyre::{Result, WrapErr};
use lessonbook_core::models::reference::ReferenceData;
use sqlx::{Pool, Postgres};

pub async fn get_study_groups(pool: &Pool<Postgres>) -> Result<Vec<DbStudyGroup>> {
    sqlx::query_as::<_, DbStudyGroup>("SELECT id, name FROM study_groups ORDER BY id")
        .fetch_all(pool)
        .await
        .wrap_err("Failed to load study groups")
}

pub async fn get_teachers(pool: &Pool<Postgres>) -> Result<Vec<DbTeacher>> {
    sqlx::query_as::<_, DbTeacher>("SELECT id, full_name FROM teachers ORDER BY id")
        .fetch_all(pool)
        .await
        .wrap_err("Failed to load teachers")
}

pub async fn get_classrooms(pool: &Pool<Postgres>) -> Result<Vec<DbClassroom>> {
    sqlx::query_as::<_, DbClassroom>("SELECT id, number FROM classrooms ORDER BY id")
        .fetch_all(pool)
        .await
        .wrap_err("Failed to load classrooms")
}

pub async fn get_disciplines(pool: &Pool<Postgres>) -> Result<Vec<DbDiscipline>> {
    sqlx::query_as::<_, DbDiscipline>("SELECT id, name FROM disciplines ORDER BY id")
        .fetch_all(pool)
        .await
        .wrap_err("Failed to load disciplines")
}

/// Loads every reference set the booking rule resolves against.
pub async fn load_reference_data(pool: &Pool<Postgres>) -> Result<ReferenceData> {
    let (groups, teachers, classrooms, disciplines) = tokio::try_join!(
        get_study_groups(pool),
        get_teachers(pool),
        get_classrooms(pool),
        get_disciplines(pool),
    )?;

    tracing::info!(
        "Loaded reference data: {} groups, {} teachers, {} classrooms, {} disciplines",
        groups.len(),
        teachers.len(),
        classrooms.len(),
        disciplines.len()
    );

    Ok(ReferenceData::new(
        groups.into_iter().map(Into::into),
        teachers.into_iter().map(Into::into),
        classrooms.into_iter().map(Into::into),
        disciplines.into_iter().map(Into::into),
    ))
}
