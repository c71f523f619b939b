//! Login and logout flows for both credential scopes.

use academy_core::auth::{AuthApi, AuthScope, CredentialStore, LoginRequest, LoginResponse};
use academy_core::error::{AcademyError, Result};
use serde_json::Value;
use std::sync::Arc;

use crate::cart_store::SessionCartStore;

/// Keeps the stored credentials and the shared cart consistent with the
/// session.
///
/// The cart belongs to the end-user session only: end-user login reloads it
/// and end-user logout clears it. Admin login and logout never touch it.
pub struct AuthSessionUseCase {
    auth: Arc<dyn AuthApi>,
    credentials: Arc<dyn CredentialStore>,
    cart: SessionCartStore,
}

impl AuthSessionUseCase {
    pub fn new(
        auth: Arc<dyn AuthApi>,
        credentials: Arc<dyn CredentialStore>,
        cart: SessionCartStore,
    ) -> Self {
        Self {
            auth,
            credentials,
            cart,
        }
    }

    /// Logs an end user in, stores the token and reloads the cart.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self.auth.login(&LoginRequest::new(email, password)).await?;
        let token = response
            .token()
            .ok_or_else(|| AcademyError::security("Token not found in response"))?;

        self.credentials.set_token(AuthScope::EndUser, token)?;
        if let Some(user) = response.user() {
            self.credentials
                .set_profile(AuthScope::EndUser, &user.to_string())?;
        }
        tracing::info!("[AuthSession] End user logged in");

        self.cart.reload().await;
        Ok(response)
    }

    /// Logs an admin or super-admin in and stores the admin token and role.
    pub async fn login_admin(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .auth
            .login_admin(&LoginRequest::new(email, password))
            .await?;
        let token = response
            .token()
            .ok_or_else(|| AcademyError::security("Token not found in response"))?;

        self.credentials.set_token(AuthScope::Admin, token)?;
        if let Some(role) = response.role() {
            self.credentials.set_profile(AuthScope::Admin, role)?;
        }
        tracing::info!("[AuthSession] Admin logged in (role: {:?})", response.role());

        Ok(response)
    }

    pub async fn register(&self, payload: &Value) -> Result<Value> {
        self.auth.register(payload).await
    }

    /// Ends the end-user session.
    ///
    /// The server is told first while the token is still available; a failure
    /// there is only logged. Local credentials are always removed and the
    /// cart is cleared.
    pub async fn logout(&self) -> Result<()> {
        if self.credentials.has_token(AuthScope::EndUser) {
            if let Err(e) = self.auth.logout().await {
                tracing::warn!("[AuthSession] Server logout failed: {}", e);
            }
        }

        self.credentials.clear(AuthScope::EndUser)?;
        self.cart.clear();
        tracing::info!("[AuthSession] End user logged out");
        Ok(())
    }

    pub fn logout_admin(&self) -> Result<()> {
        self.credentials.clear(AuthScope::Admin)?;
        tracing::info!("[AuthSession] Admin logged out");
        Ok(())
    }

    pub fn is_logged_in(&self, scope: AuthScope) -> bool {
        self.credentials.has_token(scope)
    }

    /// Stored end-user profile, if it parses as JSON.
    pub fn current_user(&self) -> Option<Value> {
        let raw = self.credentials.profile(AuthScope::EndUser).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn admin_role(&self) -> Option<String> {
        self.credentials.profile(AuthScope::Admin).ok().flatten()
    }
}
