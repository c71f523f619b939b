//! Purchased courses, watch history and favorites of the end user.

use academy_core::cart::CourseId;
use academy_core::error::Result;
use academy_core::library::{Enrollment, FavoriteCourse, FavoritesApi, HistoryEntry, LibraryApi};
use std::sync::Arc;

pub struct LibraryUseCase {
    library: Arc<dyn LibraryApi>,
    favorites: Arc<dyn FavoritesApi>,
}

impl LibraryUseCase {
    pub fn new(library: Arc<dyn LibraryApi>, favorites: Arc<dyn FavoritesApi>) -> Self {
        Self { library, favorites }
    }

    pub async fn my_courses(&self) -> Result<Vec<Enrollment>> {
        self.library.my_courses().await
    }

    pub async fn history(&self) -> Result<Vec<HistoryEntry>> {
        self.library.history().await
    }

    pub async fn favorites(&self) -> Result<Vec<FavoriteCourse>> {
        self.favorites.favorite_courses().await
    }

    /// Whether the course has been purchased.
    pub async fn owns_course(&self, course_id: CourseId) -> Result<bool> {
        let courses = self.library.my_courses().await?;
        Ok(courses.iter().any(|enrollment| enrollment.course_id == course_id))
    }

    /// Flips the favorite mark of a course and returns the new state.
    pub async fn toggle_favorite(&self, course_id: CourseId) -> Result<bool> {
        let favorites = self.favorites.favorite_courses().await?;
        let is_favorite = favorites.iter().any(|favorite| favorite.course_id == course_id);

        if is_favorite {
            self.favorites.remove_favorite_course(course_id).await?;
        } else {
            self.favorites.add_favorite_course(course_id).await?;
        }
        tracing::debug!("[Library] Course {} favorite: {}", course_id, !is_favorite);
        Ok(!is_favorite)
    }
}
