use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::reference::{ClassroomId, DisciplineId, GroupId, LessonId, TeacherId};

pub const DEFAULT_LESSON_TYPE: &str = "Lecture";

/// One scheduled occurrence of a discipline for a group.
///
/// `id` stays `None` while the lesson is only staged in the working set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Option<LessonId>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    pub classroom_id: ClassroomId,
    pub discipline_id: DisciplineId,
    pub lesson_type: String,
}

impl Lesson {
    /// Whether this lesson's `[start, end)` window overlaps `other`'s on the same date.
    ///
    /// `self` is the candidate. The start is inclusive and the end exclusive, so
    /// a lesson ending at 10:30 does not collide with one starting at 10:30.
    pub fn overlaps(&self, other: &Lesson) -> bool {
        if self.date != other.date {
            return false;
        }

        let (start, end) = (self.start_time, self.end_time);
        let (other_start, other_end) = (other.start_time, other.end_time);

        (start >= other_start && start < other_end)
            || (end > other_start && end <= other_end)
            || (start <= other_start && end >= other_end)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddLessonRequest {
    pub date: Option<NaiveDate>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub group_id: Option<GroupId>,
    pub teacher_id: Option<TeacherId>,
    pub classroom_id: Option<ClassroomId>,
    pub discipline_id: Option<DisciplineId>,
    pub lesson_type: Option<String>,
}

impl AddLessonRequest {
    /// Turns the submitted form into a candidate lesson.
    ///
    /// Only checks presence and time syntax; reference resolution and the
    /// start/end ordering belong to the admission check.
    pub fn into_candidate(self) -> BookingResult<Lesson> {
        let (
            Some(date),
            Some(start_time),
            Some(end_time),
            Some(group_id),
            Some(teacher_id),
            Some(classroom_id),
            Some(discipline_id),
        ) = (
            self.date,
            self.start_time,
            self.end_time,
            self.group_id,
            self.teacher_id,
            self.classroom_id,
            self.discipline_id,
        )
        else {
            return Err(BookingError::validation("all fields must be filled"));
        };

        let lesson_type = self
            .lesson_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_LESSON_TYPE.to_string());

        Ok(Lesson {
            id: None,
            date,
            start_time: parse_time_of_day(&start_time)?,
            end_time: parse_time_of_day(&end_time)?,
            group_id,
            teacher_id,
            classroom_id,
            discipline_id,
            lesson_type,
        })
    }
}

/// Parses `H:MM`, `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(input: &str) -> BookingResult<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .map_err(|_| BookingError::Validation(format!("invalid time of day: {:?}", input)))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddLessonResponse {
    Admitted {
        lesson: Lesson,
    },
    Rejected {
        conflict: crate::admission::Conflict,
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub saved: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLessonsResponse {
    pub lessons: Vec<Lesson>,
    pub pending: usize,
}
