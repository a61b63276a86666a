use async_trait::async_trait;
use eyre::Result;
use lessonbook_core::{
    errors::{BookingError, BookingResult},
    models::lesson::Lesson,
    repository::ScheduleRepository,
};
use tracing::{debug, info};

use crate::{DbPool, repositories};

/// PostgreSQL-backed working set of lessons.
///
/// The schedule is read once when the store is opened. Staged lessons live in
/// memory until [`commit`](ScheduleRepository::commit) inserts them all in one
/// transaction; if that fails, they stay staged.
pub struct PgScheduleRepository {
    pool: DbPool,
    saved: Vec<Lesson>,
    pending: Vec<Lesson>,
}

impl PgScheduleRepository {
    pub async fn open(pool: DbPool) -> Result<Self> {
        let saved = repositories::lesson::get_all_lessons(&pool).await?;
        info!("Opened schedule with {} saved lessons", saved.len());

        Ok(Self {
            pool,
            saved,
            pending: Vec::new(),
        })
    }
}

#[async_trait]
impl ScheduleRepository for PgScheduleRepository {
    async fn all_lessons(&self) -> BookingResult<Vec<Lesson>> {
        Ok(self.saved.iter().chain(&self.pending).cloned().collect())
    }

    async fn stage(&mut self, lesson: Lesson) -> BookingResult<()> {
        debug!("Staging lesson on {} {}", lesson.date, lesson.start_time);
        self.pending.push(lesson);
        Ok(())
    }

    async fn commit(&mut self) -> BookingResult<usize> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let ids = repositories::lesson::insert_lessons(&self.pool, &self.pending)
            .await
            .map_err(BookingError::Persistence)?;

        let count = ids.len();
        for (mut lesson, id) in self.pending.drain(..).zip(ids) {
            lesson.id = Some(id);
            self.saved.push(lesson);
        }

        Ok(count)
    }

    fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
