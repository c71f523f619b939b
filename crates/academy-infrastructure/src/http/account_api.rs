//! `AccountApi` over HTTP.

use super::client::ApiClient;
use academy_core::account::AccountApi;
use academy_core::auth::AuthScope;
use academy_core::error::Result;
use reqwest::Method;
use serde_json::Value;

#[async_trait::async_trait]
impl AccountApi for ApiClient {
    async fn profile(&self) -> Result<Value> {
        let request = self.request(Method::GET, "/user/profile", AuthScope::EndUser);
        self.send_json(request).await
    }

    async fn update_profile(&self, payload: &Value) -> Result<Value> {
        let request = self
            .request(Method::POST, "/user/update-profile", AuthScope::EndUser)
            .json(payload);
        self.send_json(request).await
    }

    async fn change_password(&self, payload: &Value) -> Result<Value> {
        let request = self
            .request(Method::POST, "/user/change-password", AuthScope::EndUser)
            .json(payload);
        self.send_json(request).await
    }
}
