//! Library models.

use serde::{Deserialize, Serialize};

use crate::cart::{CourseId, CourseSummary};
use crate::course::{Lesson, LessonId};

/// A purchased course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: u64,
    pub course_id: CourseId,
    #[serde(default)]
    pub course: Option<CourseSummary>,
}

/// A lesson the user has started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    #[serde(default)]
    pub lesson_id: Option<LessonId>,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default)]
    pub lesson: Option<Lesson>,
}

/// A course marked as favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteCourse {
    pub id: u64,
    pub course_id: CourseId,
    #[serde(default)]
    pub course: Option<CourseSummary>,
}
