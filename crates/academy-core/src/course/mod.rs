//! Purchased-course domain module.
//!
//! - `model`: course content and lessons
//! - `progress`: locally tracked completion and playback positions
//! - `api`: remote content endpoints (`LessonApi`)

mod api;
mod model;
mod progress;

pub use api::LessonApi;
pub use model::{CourseContent, Lesson, LessonId, LessonItem};
pub use progress::{CourseProgress, ProgressRepository};
