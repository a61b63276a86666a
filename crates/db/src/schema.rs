use eyre::{Result, WrapErr};
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Reference tables
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS study_groups (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await
    .wrap_err("Failed to create study_groups")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id SERIAL PRIMARY KEY,
            full_name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await
    .wrap_err("Failed to create teachers")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classrooms (
            id SERIAL PRIMARY KEY,
            number VARCHAR(50) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await
    .wrap_err("Failed to create classrooms")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS disciplines (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await
    .wrap_err("Failed to create disciplines")?;

    // Create schedule table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedule (
            id SERIAL PRIMARY KEY,
            lesson_date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            group_id INTEGER NOT NULL REFERENCES study_groups(id),
            teacher_id INTEGER NOT NULL REFERENCES teachers(id),
            classroom_id INTEGER NOT NULL REFERENCES classrooms(id),
            discipline_id INTEGER NOT NULL REFERENCES disciplines(id),
            lesson_type VARCHAR(50) NOT NULL DEFAULT 'Lecture',
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await
    .wrap_err("Failed to create schedule")?;

    // Prepared statements take one command at a time
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_schedule_lesson_date ON schedule(lesson_date)",
        "CREATE INDEX IF NOT EXISTS idx_schedule_group_id ON schedule(group_id)",
        "CREATE INDEX IF NOT EXISTS idx_schedule_teacher_id ON schedule(teacher_id)",
        "CREATE INDEX IF NOT EXISTS idx_schedule_classroom_id ON schedule(classroom_id)",
    ];
    for statement in indexes {
        sqlx::query(statement)
            .execute(pool)
            .await
            .wrap_err_with(|| format!("Failed to run: {}", statement))?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
