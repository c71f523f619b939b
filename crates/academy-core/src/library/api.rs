//! Library and favorites API traits.

use super::model::{Enrollment, FavoriteCourse, HistoryEntry};
use crate::cart::CourseId;
use crate::error::Result;

/// Purchased courses and watch history of the end user.
#[async_trait::async_trait]
pub trait LibraryApi: Send + Sync {
    /// `GET /user/getMyCourses`.
    async fn my_courses(&self) -> Result<Vec<Enrollment>>;

    /// `GET /user/getHistory`. A response without `history` is empty.
    async fn history(&self) -> Result<Vec<HistoryEntry>>;
}

/// Favorite courses of the end user.
#[async_trait::async_trait]
pub trait FavoritesApi: Send + Sync {
    async fn favorite_courses(&self) -> Result<Vec<FavoriteCourse>>;

    async fn add_favorite_course(&self, course_id: CourseId) -> Result<()>;

    /// Removes the favorite referencing `course_id`.
    async fn remove_favorite_course(&self, course_id: CourseId) -> Result<()>;
}
