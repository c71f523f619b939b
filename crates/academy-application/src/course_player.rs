//! Playback of a purchased course.

use academy_core::cart::CourseId;
use academy_core::course::{
    CourseContent, CourseProgress, Lesson, LessonApi, LessonId, ProgressRepository,
};
use academy_core::error::{AcademyError, Result};
use std::sync::Arc;

/// One opened course: its lessons, the active lesson and local progress.
///
/// Progress is written through on every change. Storage failures are logged
/// and never interrupt playback.
pub struct CoursePlayer {
    lessons: Arc<dyn LessonApi>,
    progress_repository: Arc<dyn ProgressRepository>,
    course: CourseContent,
    progress: CourseProgress,
    active: Option<Lesson>,
}

impl CoursePlayer {
    /// Fetches the course and resumes at the last opened lesson, or the
    /// first lesson when none was recorded.
    pub async fn open(
        lessons: Arc<dyn LessonApi>,
        progress_repository: Arc<dyn ProgressRepository>,
        course_id: CourseId,
    ) -> Result<Self> {
        let course = lessons.course_content(course_id).await?;

        let progress = progress_repository
            .load_progress(course_id)
            .unwrap_or_else(|e| {
                tracing::warn!("[CoursePlayer] Failed to load progress of course {}: {}", course_id, e);
                CourseProgress::default()
            });
        let last_lesson = progress_repository
            .last_lesson(course_id)
            .unwrap_or_else(|e| {
                tracing::warn!("[CoursePlayer] Failed to load last lesson of course {}: {}", course_id, e);
                None
            });

        let active = course.resume_lesson(last_lesson).cloned();
        tracing::debug!(
            "[CoursePlayer] Opened course {} with {} lesson(s), active: {:?}",
            course_id,
            course.lessons.len(),
            active.as_ref().map(|lesson| lesson.id)
        );

        Ok(Self {
            lessons,
            progress_repository,
            course,
            progress,
            active,
        })
    }

    pub fn course(&self) -> &CourseContent {
        &self.course
    }

    pub fn progress(&self) -> &CourseProgress {
        &self.progress
    }

    pub fn active_lesson(&self) -> Option<&Lesson> {
        self.active.as_ref()
    }

    /// Starts a lesson of this course and makes it active.
    pub async fn select_lesson(&mut self, lesson_id: LessonId) -> Result<&Lesson> {
        if self.course.position_of(lesson_id).is_none() {
            return Err(AcademyError::not_found("Lesson", lesson_id.to_string()));
        }

        let lesson = self.lessons.start_lesson(lesson_id).await?;
        if let Err(e) = self
            .progress_repository
            .set_last_lesson(self.course.id, lesson_id)
        {
            tracing::warn!("[CoursePlayer] Failed to save last lesson: {}", e);
        }

        Ok(&*self.active.insert(lesson))
    }

    /// Flips completion of the active lesson. Returns the new mark, or
    /// `None` when no lesson is active.
    pub fn toggle_complete(&mut self) -> Option<bool> {
        let lesson_id = self.active.as_ref()?.id;
        let completed = self.progress.toggle_completed(lesson_id);
        self.persist();
        Some(completed)
    }

    pub fn is_completed(&self, lesson_id: LessonId) -> bool {
        self.progress.is_completed(lesson_id)
    }

    /// Records the playback position of the active lesson. Negative or
    /// non-finite positions are ignored.
    pub fn record_video_time(&mut self, seconds: f64) {
        let Some(lesson_id) = self.active.as_ref().map(|lesson| lesson.id) else {
            return;
        };
        if !self.progress.record_position(lesson_id, seconds) {
            tracing::debug!(
                "[CoursePlayer] Ignored position {} for lesson {}",
                seconds,
                lesson_id
            );
            return;
        }
        self.persist();
    }

    /// Where playback of the active lesson should resume.
    pub fn resume_position(&self) -> Option<f64> {
        let lesson = self.active.as_ref()?;
        self.progress.resume_position(lesson.id)
    }

    pub fn completion_percentage(&self) -> u8 {
        self.progress
            .completion_percentage(self.course.lessons.len())
    }

    pub fn has_next(&self) -> bool {
        self.active_position()
            .is_some_and(|position| position + 1 < self.course.lessons.len())
    }

    pub fn has_previous(&self) -> bool {
        self.active_position().is_some_and(|position| position > 0)
    }

    /// Moves to the following lesson. Returns `None` at the end of the course.
    pub async fn next(&mut self) -> Result<Option<&Lesson>> {
        if !self.has_next() {
            return Ok(None);
        }
        let Some(position) = self.active_position() else {
            return Ok(None);
        };
        let lesson_id = self.course.lessons[position + 1].id;
        self.select_lesson(lesson_id).await.map(Some)
    }

    /// Moves to the preceding lesson. Returns `None` at the start.
    pub async fn previous(&mut self) -> Result<Option<&Lesson>> {
        if !self.has_previous() {
            return Ok(None);
        }
        let Some(position) = self.active_position() else {
            return Ok(None);
        };
        let lesson_id = self.course.lessons[position - 1].id;
        self.select_lesson(lesson_id).await.map(Some)
    }

    fn active_position(&self) -> Option<usize> {
        let lesson = self.active.as_ref()?;
        self.course.position_of(lesson.id)
    }

    fn persist(&self) {
        if let Err(e) = self
            .progress_repository
            .save_progress(self.course.id, &self.progress)
        {
            tracing::warn!(
                "[CoursePlayer] Failed to save progress of course {}: {}",
                self.course.id,
                e
            );
        }
    }
}
