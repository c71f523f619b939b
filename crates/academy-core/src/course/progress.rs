//! Locally tracked lesson progress.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::model::LessonId;
use crate::cart::CourseId;
use crate::error::Result;

/// Completion marks and playback positions for one course.
///
/// Stored as `{"completed": [..], "videoProgress": {"<lesson>": seconds}}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    #[serde(default)]
    pub completed: BTreeSet<LessonId>,
    #[serde(default, deserialize_with = "playable_positions")]
    pub video_progress: BTreeMap<LessonId, f64>,
}

fn is_playable(seconds: f64) -> bool {
    seconds.is_finite() && seconds >= 0.0
}

/// Reads stored positions, dropping `null` and negative entries.
fn playable_positions<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<LessonId, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<LessonId, Option<f64>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(lesson_id, seconds)| {
            seconds
                .filter(|seconds| is_playable(*seconds))
                .map(|seconds| (lesson_id, seconds))
        })
        .collect())
}

impl CourseProgress {
    /// Flips the completion mark of a lesson and returns the new state.
    pub fn toggle_completed(&mut self, lesson_id: LessonId) -> bool {
        if self.completed.remove(&lesson_id) {
            false
        } else {
            self.completed.insert(lesson_id);
            true
        }
    }

    pub fn is_completed(&self, lesson_id: LessonId) -> bool {
        self.completed.contains(&lesson_id)
    }

    /// Stores a playback position. Returns `false` and keeps the previous
    /// value when `seconds` is negative or not finite.
    pub fn record_position(&mut self, lesson_id: LessonId, seconds: f64) -> bool {
        if !is_playable(seconds) {
            return false;
        }
        self.video_progress.insert(lesson_id, seconds);
        true
    }

    /// Saved playback position, only when playback actually advanced.
    pub fn resume_position(&self, lesson_id: LessonId) -> Option<f64> {
        self.video_progress
            .get(&lesson_id)
            .copied()
            .filter(|seconds| *seconds > 0.0)
    }

    /// Rounded percentage of completed lessons; `0` for an empty course.
    pub fn completion_percentage(&self, total_lessons: usize) -> u8 {
        if total_lessons == 0 {
            return 0;
        }
        let ratio = self.completed.len() as f64 / total_lessons as f64;
        (ratio * 100.0).round().min(100.0) as u8
    }
}

/// Persistence for per-course progress and the last opened lesson.
pub trait ProgressRepository: Send + Sync {
    /// Saved progress, default when nothing was stored.
    fn load_progress(&self, course_id: CourseId) -> Result<CourseProgress>;

    fn save_progress(&self, course_id: CourseId, progress: &CourseProgress) -> Result<()>;

    fn last_lesson(&self, course_id: CourseId) -> Result<Option<LessonId>>;

    fn set_last_lesson(&self, course_id: CourseId, lesson_id: LessonId) -> Result<()>;
}
