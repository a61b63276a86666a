use std::sync::Arc;

use tracing::{info, warn};

use crate::admission::{Admission, try_admit};
use crate::errors::BookingResult;
use crate::models::lesson::Lesson;
use crate::models::reference::ReferenceData;
use crate::repository::ScheduleRepository;

/// One editing session over the timetable.
///
/// Admitted lessons are staged immediately, so later checks in the same
/// session see them even before [`save`](BookingSession::save) is called.
/// Callers sharing a session between tasks must hold exclusive access across
/// a whole [`add_lesson`](BookingSession::add_lesson) call.
pub struct BookingSession<R> {
    repository: R,
    references: Arc<ReferenceData>,
}

impl<R: ScheduleRepository> BookingSession<R> {
    /// Accepts either an owned catalog or one already shared with other readers.
    pub fn new(repository: R, references: impl Into<Arc<ReferenceData>>) -> Self {
        Self {
            repository,
            references: references.into(),
        }
    }

    pub async fn add_lesson(&mut self, candidate: Lesson) -> BookingResult<Admission> {
        let existing = self.repository.all_lessons().await?;
        let admission = try_admit(&candidate, &existing, &*self.references)?;

        match admission {
            Admission::Admitted => {
                info!(
                    "Admitted lesson on {} {}-{} for {}",
                    candidate.date, candidate.start_time, candidate.end_time, candidate.group_id
                );
                self.repository.stage(candidate).await?;
            }
            Admission::Rejected(conflict) => {
                warn!(
                    "Rejected lesson on {} {}-{}: {}",
                    candidate.date, candidate.start_time, candidate.end_time, conflict
                );
            }
        }

        Ok(admission)
    }

    pub async fn save(&mut self) -> BookingResult<usize> {
        let pending = self.repository.pending_count();
        match self.repository.commit().await {
            Ok(saved) => {
                info!("Saved {} lessons", saved);
                Ok(saved)
            }
            Err(e) => {
                warn!("Save failed, {} lessons remain pending: {}", pending, e);
                Err(e)
            }
        }
    }

    pub async fn lessons(&self) -> BookingResult<Vec<Lesson>> {
        self.repository.all_lessons().await
    }

    pub fn pending_count(&self) -> usize {
        self.repository.pending_count()
    }

    pub fn references(&self) -> &Arc<ReferenceData> {
        &self.references
    }
}
