//! Lesson progress persisted in key-value storage.

use academy_core::cart::CourseId;
use academy_core::course::{CourseProgress, LessonId, ProgressRepository};
use academy_core::error::Result;
use academy_core::storage::KeyValueStore;
use std::sync::Arc;

fn progress_key(course_id: CourseId) -> String {
    format!("course_{}_progress", course_id)
}

fn last_lesson_key(course_id: CourseId) -> String {
    format!("course_{}_last_lesson", course_id)
}

/// Stores progress under `course_{id}_progress` and the last opened lesson
/// under `course_{id}_last_lesson`.
#[derive(Clone)]
pub struct KeyValueProgressRepository {
    storage: Arc<dyn KeyValueStore>,
}

impl KeyValueProgressRepository {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }
}

impl ProgressRepository for KeyValueProgressRepository {
    fn load_progress(&self, course_id: CourseId) -> Result<CourseProgress> {
        match self.storage.get_item(&progress_key(course_id))? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(CourseProgress::default()),
        }
    }

    fn save_progress(&self, course_id: CourseId, progress: &CourseProgress) -> Result<()> {
        let json = serde_json::to_string(progress)?;
        self.storage.set_item(&progress_key(course_id), &json)
    }

    fn last_lesson(&self, course_id: CourseId) -> Result<Option<LessonId>> {
        let stored = self.storage.get_item(&last_lesson_key(course_id))?;
        // Unparsable values are treated as no saved lesson.
        Ok(stored.and_then(|value| value.trim().parse::<LessonId>().ok()))
    }

    fn set_last_lesson(&self, course_id: CourseId, lesson_id: LessonId) -> Result<()> {
        self.storage
            .set_item(&last_lesson_key(course_id), &lesson_id.to_string())
    }
}
