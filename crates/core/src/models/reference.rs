//! Reference entities a lesson points at.
//!
//! Groups, teachers, classrooms and disciplines are maintained elsewhere; the
//! booking rule only needs to know whether an identifier resolves.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} #{}", $label, self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Identifier of a study group.
    GroupId,
    "group"
);
entity_id!(
    /// Identifier of a teacher.
    TeacherId,
    "teacher"
);
entity_id!(
    /// Identifier of a classroom.
    ClassroomId,
    "classroom"
);
entity_id!(
    /// Identifier of a discipline.
    DisciplineId,
    "discipline"
);
entity_id!(
    /// Storage-assigned identifier of a persisted lesson.
    LessonId,
    "lesson"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: GroupId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: ClassroomId,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: DisciplineId,
    pub name: String,
}

/// Resolves identifiers to the entities they refer to.
pub trait ReferenceResolver {
    fn group(&self, id: GroupId) -> Option<&StudyGroup>;
    fn teacher(&self, id: TeacherId) -> Option<&Teacher>;
    fn classroom(&self, id: ClassroomId) -> Option<&Classroom>;
    fn discipline(&self, id: DisciplineId) -> Option<&Discipline>;
}

/// In-memory catalog of every reference entity, loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    groups: HashMap<GroupId, StudyGroup>,
    teachers: HashMap<TeacherId, Teacher>,
    classrooms: HashMap<ClassroomId, Classroom>,
    disciplines: HashMap<DisciplineId, Discipline>,
}

impl ReferenceData {
    pub fn new(
        groups: impl IntoIterator<Item = StudyGroup>,
        teachers: impl IntoIterator<Item = Teacher>,
        classrooms: impl IntoIterator<Item = Classroom>,
        disciplines: impl IntoIterator<Item = Discipline>,
    ) -> Self {
        Self {
            groups: groups.into_iter().map(|g| (g.id, g)).collect(),
            teachers: teachers.into_iter().map(|t| (t.id, t)).collect(),
            classrooms: classrooms.into_iter().map(|c| (c.id, c)).collect(),
            disciplines: disciplines.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    pub fn groups(&self) -> Vec<&StudyGroup> {
        sorted_by_id(self.groups.values(), |g| g.id)
    }

    pub fn teachers(&self) -> Vec<&Teacher> {
        sorted_by_id(self.teachers.values(), |t| t.id)
    }

    pub fn classrooms(&self) -> Vec<&Classroom> {
        sorted_by_id(self.classrooms.values(), |c| c.id)
    }

    pub fn disciplines(&self) -> Vec<&Discipline> {
        sorted_by_id(self.disciplines.values(), |d| d.id)
    }
}

// Dropdowns want a stable order; HashMap iteration has none.
fn sorted_by_id<'a, T, K: Ord>(
    items: impl Iterator<Item = &'a T>,
    key: impl Fn(&T) -> K,
) -> Vec<&'a T> {
    let mut items: Vec<&T> = items.collect();
    items.sort_by_key(|item| key(item));
    items
}

impl ReferenceResolver for ReferenceData {
    fn group(&self, id: GroupId) -> Option<&StudyGroup> {
        self.groups.get(&id)
    }

    fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.get(&id)
    }

    fn classroom(&self, id: ClassroomId) -> Option<&Classroom> {
        self.classrooms.get(&id)
    }

    fn discipline(&self, id: DisciplineId) -> Option<&Discipline> {
        self.disciplines.get(&id)
    }
}
