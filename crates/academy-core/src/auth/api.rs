//! Authentication API trait and wire types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Email/password pair posted to both login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Raw login response body.
///
/// The backend has shipped the token under several names over time, so the
/// body is kept as JSON and searched for a token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoginResponse(pub Value);

impl LoginResponse {
    /// First present of `token`, `access_token`, `auth_token`, `data.token`.
    pub fn token(&self) -> Option<&str> {
        ["token", "access_token", "auth_token"]
            .iter()
            .find_map(|key| non_empty_str(self.0.get(key)))
            .or_else(|| non_empty_str(self.0.get("data").and_then(|data| data.get("token"))))
    }

    /// The `user` object, if any.
    pub fn user(&self) -> Option<&Value> {
        self.0.get("user").filter(|user| !user.is_null())
    }

    /// Admin role from `role` or `user.role`.
    pub fn role(&self) -> Option<&str> {
        non_empty_str(self.0.get("role"))
            .or_else(|| non_empty_str(self.user().and_then(|user| user.get("role"))))
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Remote authentication endpoints.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// End-user login (`POST /login`).
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// Admin and super-admin login (`POST /admin/login`).
    async fn login_admin(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// Account registration (`POST /register`). The payload is passed through.
    async fn register(&self, payload: &Value) -> Result<Value>;

    /// Invalidates the end-user token server-side (`POST /logout`).
    async fn logout(&self) -> Result<()>;
}
