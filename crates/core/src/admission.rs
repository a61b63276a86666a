//! # Booking admission
//!
//! Decides whether a candidate lesson may join the schedule.
//!
//! Groups, teachers and classrooms are each exclusive during a lesson: no two
//! lessons on the same date with overlapping `[start, end)` windows may share
//! any of them. The check is fail-fast and reports a single reason, looking at
//! the group first, then the teacher, then the classroom.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{BookingError, BookingResult};
use crate::models::lesson::Lesson;
use crate::models::reference::ReferenceResolver;

/// The resource a rejected candidate would double-book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conflict {
    Group,
    Teacher,
    Classroom,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Conflict::Group => "The group is already busy at this time",
            Conflict::Teacher => "The teacher is already busy at this time",
            Conflict::Classroom => "The classroom is already occupied at this time",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Rejected(Conflict),
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }
}

/// Checks `candidate` against `existing` without touching either.
///
/// Validation failures (unknown references, `start_time >= end_time`) come
/// back as `Err` before any conflict scan. Conflicts are an ordinary outcome
/// and come back as `Ok(Admission::Rejected(_))`.
pub fn try_admit<R>(
    candidate: &Lesson,
    existing: &[Lesson],
    references: &R,
) -> BookingResult<Admission>
where
    R: ReferenceResolver + ?Sized,
{
    validate(candidate, references)?;

    let overlapping: Vec<&Lesson> = existing.iter().filter(|l| candidate.overlaps(l)).collect();
    debug!(
        "Candidate on {} {}-{} overlaps {} of {} lessons",
        candidate.date,
        candidate.start_time,
        candidate.end_time,
        overlapping.len(),
        existing.len()
    );

    let conflict = if overlapping.iter().any(|l| l.group_id == candidate.group_id) {
        Some(Conflict::Group)
    } else if overlapping.iter().any(|l| l.teacher_id == candidate.teacher_id) {
        Some(Conflict::Teacher)
    } else if overlapping.iter().any(|l| l.classroom_id == candidate.classroom_id) {
        Some(Conflict::Classroom)
    } else {
        None
    };

    Ok(conflict.map_or(Admission::Admitted, Admission::Rejected))
}

fn validate<R>(candidate: &Lesson, references: &R) -> BookingResult<()>
where
    R: ReferenceResolver + ?Sized,
{
    if references.group(candidate.group_id).is_none() {
        return Err(unresolved(candidate.group_id));
    }
    if references.teacher(candidate.teacher_id).is_none() {
        return Err(unresolved(candidate.teacher_id));
    }
    if references.classroom(candidate.classroom_id).is_none() {
        return Err(unresolved(candidate.classroom_id));
    }
    if references.discipline(candidate.discipline_id).is_none() {
        return Err(unresolved(candidate.discipline_id));
    }

    if candidate.start_time >= candidate.end_time {
        return Err(BookingError::Validation(format!(
            "start time {} must be before end time {}",
            candidate.start_time, candidate.end_time
        )));
    }

    Ok(())
}

fn unresolved(id: impl fmt::Display) -> BookingError {
    BookingError::Validation(format!("unknown {}", id))
}
