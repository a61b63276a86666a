use crate::models::DbLesson;
use eyre::{Result, WrapErr};
use lessonbook_core::models::{lesson::Lesson, reference::LessonId};
use sqlx::{Pool, Postgres};

pub async fn get_all_lessons(pool: &Pool<Postgres>) -> Result<Vec<Lesson>> {
    let rows = sqlx::query_as::<_, DbLesson>(
        r#"
        SELECT id, lesson_date, start_time, end_time,
               group_id, teacher_id, classroom_id, discipline_id, lesson_type
        FROM schedule
        ORDER BY lesson_date ASC, start_time ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .wrap_err("Failed to load schedule")?;

    tracing::debug!("Loaded {} lessons", rows.len());
    Ok(rows.into_iter().map(Lesson::from).collect())
}

/// Inserts `lessons` in a single transaction and returns their new ids in order.
///
/// Nothing is written unless every insert succeeds.
pub async fn insert_lessons(pool: &Pool<Postgres>, lessons: &[Lesson]) -> Result<Vec<LessonId>> {
    let mut tx = pool.begin().await.wrap_err("Failed to open transaction")?;
    let mut ids = Vec::with_capacity(lessons.len());

    for lesson in lessons {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO schedule (lesson_date, start_time, end_time,
                                  group_id, teacher_id, classroom_id, discipline_id, lesson_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(lesson.date)
        .bind(lesson.start_time)
        .bind(lesson.end_time)
        .bind(lesson.group_id.0)
        .bind(lesson.teacher_id.0)
        .bind(lesson.classroom_id.0)
        .bind(lesson.discipline_id.0)
        .bind(&lesson.lesson_type)
        .fetch_one(&mut *tx)
        .await
        .wrap_err_with(|| {
            format!(
                "Failed to insert lesson on {} {}-{}",
                lesson.date, lesson.start_time, lesson.end_time
            )
        })?;

        ids.push(LessonId(id));
    }

    tx.commit().await.wrap_err("Failed to commit staged lessons")?;
    Ok(ids)
}
