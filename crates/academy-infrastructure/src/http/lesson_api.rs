//! `LessonApi` over HTTP.

use super::client::ApiClient;
use super::envelope::DataEnvelope;
use academy_core::auth::AuthScope;
use academy_core::cart::CourseId;
use academy_core::course::{CourseContent, Lesson, LessonApi, LessonId};
use academy_core::error::Result;
use reqwest::Method;

#[async_trait::async_trait]
impl LessonApi for ApiClient {
    async fn course_content(&self, course_id: CourseId) -> Result<CourseContent> {
        let path = format!("/user/getCourseContent/{}", course_id);
        let request = self.request(Method::GET, &path, AuthScope::EndUser);
        let envelope: DataEnvelope<CourseContent> = self.send_json(request).await?;
        Ok(envelope.data)
    }

    async fn start_lesson(&self, lesson_id: LessonId) -> Result<Lesson> {
        let path = format!("/user/start-lesson/{}", lesson_id);
        let request = self.request(Method::GET, &path, AuthScope::EndUser);
        let envelope: DataEnvelope<Lesson> = self.send_json(request).await?;
        Ok(envelope.data)
    }
}
