//! Purchased-course API trait.

use super::model::{CourseContent, Lesson, LessonId};
use crate::cart::CourseId;
use crate::error::Result;

/// Remote endpoints serving purchased course content.
#[async_trait::async_trait]
pub trait LessonApi: Send + Sync {
    /// Course with its lesson list (`GET /user/getCourseContent/{id}`).
    async fn course_content(&self, course_id: CourseId) -> Result<CourseContent>;

    /// Starts a lesson and returns it with its items (`GET /user/start-lesson/{id}`).
    async fn start_lesson(&self, lesson_id: LessonId) -> Result<Lesson>;
}
