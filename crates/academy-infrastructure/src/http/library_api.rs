//! `LibraryApi` and `FavoritesApi` over HTTP.

use super::client::ApiClient;
use super::envelope::ListEnvelope;
use academy_core::auth::AuthScope;
use academy_core::cart::CourseId;
use academy_core::error::Result;
use academy_core::library::{Enrollment, FavoriteCourse, FavoritesApi, HistoryEntry, LibraryApi};
use reqwest::Method;
use serde::Deserialize;

/// `{ "message": "success", "history": [...] }`.
#[derive(Debug, Deserialize)]
struct HistoryEnvelope {
    #[serde(default)]
    history: Option<Vec<HistoryEntry>>,
}

fn add_favorite_path(course_id: CourseId) -> String {
    format!("/user/addFavoriteCourse/{}", course_id)
}

fn remove_favorite_path(course_id: CourseId) -> String {
    format!("/user/deleteCourse/{}", course_id)
}

#[async_trait::async_trait]
impl LibraryApi for ApiClient {
    async fn my_courses(&self) -> Result<Vec<Enrollment>> {
        let request = self.request(Method::GET, "/user/getMyCourses", AuthScope::EndUser);
        let envelope: ListEnvelope<Enrollment> = self.send_json(request).await?;
        Ok(envelope.into_items())
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>> {
        let request = self.request(Method::GET, "/user/getHistory", AuthScope::EndUser);
        let envelope: HistoryEnvelope = self.send_json(request).await?;
        Ok(envelope.history.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl FavoritesApi for ApiClient {
    async fn favorite_courses(&self) -> Result<Vec<FavoriteCourse>> {
        let request = self.request(Method::GET, "/user/getFavoriteCourse", AuthScope::EndUser);
        let envelope: ListEnvelope<FavoriteCourse> = self.send_json(request).await?;
        Ok(envelope.into_items())
    }

    // The backend registers this mutation as a GET.
    async fn add_favorite_course(&self, course_id: CourseId) -> Result<()> {
        let request = self.request(Method::GET, &add_favorite_path(course_id), AuthScope::EndUser);
        self.send(request).await?;
        Ok(())
    }

    async fn remove_favorite_course(&self, course_id: CourseId) -> Result<()> {
        let request = self.request(
            Method::DELETE,
            &remove_favorite_path(course_id),
            AuthScope::EndUser,
        );
        self.send(request).await?;
        Ok(())
    }
}
