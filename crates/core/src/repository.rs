use async_trait::async_trait;
use tracing::debug;

use crate::errors::BookingResult;
use crate::models::lesson::Lesson;
use crate::models::reference::LessonId;

/// Owns the authoritative set of lessons.
///
/// Staged lessons are part of the working set returned by [`all_lessons`] as
/// soon as they are staged, but only become durable on [`commit`]. A failed
/// commit leaves every staged lesson pending so the next save retries them.
///
/// [`all_lessons`]: ScheduleRepository::all_lessons
/// [`commit`]: ScheduleRepository::commit
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Persisted and staged lessons, in no particular order.
    async fn all_lessons(&self) -> BookingResult<Vec<Lesson>>;

    async fn stage(&mut self, lesson: Lesson) -> BookingResult<()>;

    /// Writes every staged lesson, returning how many were written.
    async fn commit(&mut self) -> BookingResult<usize>;

    fn pending_count(&self) -> usize;
}

pub type DynScheduleRepository = Box<dyn ScheduleRepository>;

#[async_trait]
impl<R: ScheduleRepository + ?Sized> ScheduleRepository for Box<R> {
    async fn all_lessons(&self) -> BookingResult<Vec<Lesson>> {
        (**self).all_lessons().await
    }

    async fn stage(&mut self, lesson: Lesson) -> BookingResult<()> {
        (**self).stage(lesson).await
    }

    async fn commit(&mut self) -> BookingResult<usize> {
        (**self).commit().await
    }

    fn pending_count(&self) -> usize {
        (**self).pending_count()
    }
}

/// A repository that never leaves the process.
///
/// Commit simply numbers the staged lessons and moves them into the saved set.
#[derive(Debug, Default)]
pub struct MemoryScheduleRepository {
    saved: Vec<Lesson>,
    pending: Vec<Lesson>,
    next_id: i32,
}

impl MemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with lessons that count as already saved.
    pub fn with_lessons(lessons: impl IntoIterator<Item = Lesson>) -> Self {
        let saved: Vec<Lesson> = lessons.into_iter().collect();
        let next_id = saved
            .iter()
            .filter_map(|l| l.id.map(|id| id.0))
            .max()
            .unwrap_or(0);
        Self {
            saved,
            pending: Vec::new(),
            next_id,
        }
    }
}

#[async_trait]
impl ScheduleRepository for MemoryScheduleRepository {
    async fn all_lessons(&self) -> BookingResult<Vec<Lesson>> {
        Ok(self.saved.iter().chain(&self.pending).cloned().collect())
    }

    async fn stage(&mut self, lesson: Lesson) -> BookingResult<()> {
        self.pending.push(lesson);
        Ok(())
    }

    async fn commit(&mut self) -> BookingResult<usize> {
        let count = self.pending.len();
        for mut lesson in self.pending.drain(..) {
            self.next_id += 1;
            lesson.id = Some(LessonId(self.next_id));
            self.saved.push(lesson);
        }
        debug!("Committed {} lessons to memory", count);
        Ok(count)
    }

    fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
