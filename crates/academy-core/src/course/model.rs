//! Purchased-course content models.

use serde::{Deserialize, Serialize};

use crate::cart::CourseId;

/// Server-assigned identifier of a lesson.
pub type LessonId = u64;

/// A downloadable or playable part of a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub document_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    #[serde(default)]
    pub name: String,
    /// Only populated once the lesson has been started.
    #[serde(default)]
    pub items: Vec<LessonItem>,
}

impl Lesson {
    /// First item carrying a video.
    pub fn video(&self) -> Option<&LessonItem> {
        self.items.iter().find(|item| item.video_path.is_some())
    }

    /// Items carrying a document.
    pub fn documents(&self) -> impl Iterator<Item = &LessonItem> {
        self.items.iter().filter(|item| item.document_path.is_some())
    }
}

/// A purchased course with its ordered lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseContent {
    pub id: CourseId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl CourseContent {
    pub fn position_of(&self, lesson_id: LessonId) -> Option<usize> {
        self.lessons.iter().position(|lesson| lesson.id == lesson_id)
    }

    /// Lesson to open on entry: the last opened one if it still exists,
    /// otherwise the first lesson.
    pub fn resume_lesson(&self, last_lesson: Option<LessonId>) -> Option<&Lesson> {
        last_lesson
            .and_then(|id| self.lessons.iter().find(|lesson| lesson.id == id))
            .or_else(|| self.lessons.first())
    }
}
