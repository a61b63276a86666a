use chrono::{NaiveDate, NaiveTime};
use lessonbook_core::models::{
    lesson::Lesson,
    reference::{
        Classroom, ClassroomId, Discipline, DisciplineId, GroupId, LessonId, StudyGroup, Teacher,
        TeacherId,
    },
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLesson {
    pub id: i32,
    pub lesson_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub group_id: i32,
    pub teacher_id: i32,
    pub classroom_id: i32,
    pub discipline_id: i32,
    pub lesson_type: String,
}

impl From<DbLesson> for Lesson {
    fn from(row: DbLesson) -> Self {
        Lesson {
            id: Some(LessonId(row.id)),
            date: row.lesson_date,
            start_time: row.start_time,
            end_time: row.end_time,
            group_id: GroupId(row.group_id),
            teacher_id: TeacherId(row.teacher_id),
            classroom_id: ClassroomId(row.classroom_id),
            discipline_id: DisciplineId(row.discipline_id),
            lesson_type: row.lesson_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudyGroup {
    pub id: i32,
    pub name: String,
}

impl From<DbStudyGroup> for StudyGroup {
    fn from(row: DbStudyGroup) -> Self {
        StudyGroup {
            id: GroupId(row.id),
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: i32,
    pub full_name: String,
}

impl From<DbTeacher> for Teacher {
    fn from(row: DbTeacher) -> Self {
        Teacher {
            id: TeacherId(row.id),
            full_name: row.full_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClassroom {
    pub id: i32,
    pub number: String,
}

impl From<DbClassroom> for Classroom {
    fn from(row: DbClassroom) -> Self {
        Classroom {
            id: ClassroomId(row.id),
            number: row.number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDiscipline {
    pub id: i32,
    pub name: String,
}

impl From<DbDiscipline> for Discipline {
    fn from(row: DbDiscipline) -> Self {
        Discipline {
            id: DisciplineId(row.id),
            name: row.name,
        }
    }
}
