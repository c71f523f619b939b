//! `AuthApi` over HTTP.

use super::client::ApiClient;
use academy_core::auth::{AuthApi, AuthScope, LoginRequest, LoginResponse};
use academy_core::error::Result;
use reqwest::Method;
use serde_json::Value;

#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let request = self
            .request(Method::POST, "/login", AuthScope::EndUser)
            .json(request);
        self.send_json(request).await
    }

    async fn login_admin(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let request = self
            .request(Method::POST, "/admin/login", AuthScope::Admin)
            .json(request);
        self.send_json(request).await
    }

    async fn register(&self, payload: &Value) -> Result<Value> {
        let request = self
            .request(Method::POST, "/register", AuthScope::EndUser)
            .json(payload);
        self.send_json(request).await
    }

    async fn logout(&self) -> Result<()> {
        let request = self.request(Method::POST, "/logout", AuthScope::EndUser);
        self.send(request).await?;
        Ok(())
    }
}
