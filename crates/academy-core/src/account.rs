//! End-user account endpoints.

use serde_json::Value;

use crate::error::Result;

/// Profile maintenance. Payloads and responses are passed through as JSON.
#[async_trait::async_trait]
pub trait AccountApi: Send + Sync {
    /// `GET /user/profile`.
    async fn profile(&self) -> Result<Value>;

    /// `POST /user/update-profile`.
    async fn update_profile(&self, payload: &Value) -> Result<Value>;

    /// `POST /user/change-password`.
    async fn change_password(&self, payload: &Value) -> Result<Value>;
}
