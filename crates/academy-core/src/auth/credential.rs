//! Credential store trait and well-known storage keys.

use super::scope::AuthScope;
use crate::error::Result;

/// Storage key of the end-user bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Storage key of the end-user profile (JSON object).
pub const AUTH_USER_KEY: &str = "authUser";
/// Storage key of the admin / super-admin bearer token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";
/// Storage key of the admin role name.
pub const ADMIN_ROLE_KEY: &str = "adminRole";

impl AuthScope {
    /// Storage key holding this scope's bearer token.
    pub fn token_key(self) -> &'static str {
        match self {
            AuthScope::EndUser => AUTH_TOKEN_KEY,
            AuthScope::Admin => ADMIN_TOKEN_KEY,
        }
    }

    /// Storage key of the companion value written at login.
    pub fn profile_key(self) -> &'static str {
        match self {
            AuthScope::EndUser => AUTH_USER_KEY,
            AuthScope::Admin => ADMIN_ROLE_KEY,
        }
    }
}

/// Holds bearer tokens keyed by scope.
///
/// Absence of a scope's token is the only "logged out" signal for that scope.
pub trait CredentialStore: Send + Sync {
    /// Returns the bearer token of `scope`. Empty tokens count as absent.
    fn token(&self, scope: AuthScope) -> Result<Option<String>>;

    fn set_token(&self, scope: AuthScope, token: &str) -> Result<()>;

    /// Returns the companion profile value (`authUser` JSON or `adminRole`).
    fn profile(&self, scope: AuthScope) -> Result<Option<String>>;

    fn set_profile(&self, scope: AuthScope, value: &str) -> Result<()>;

    /// Removes the token and profile of `scope`.
    fn clear(&self, scope: AuthScope) -> Result<()>;

    /// Whether a token of `scope` is present. Read failures count as absent.
    fn has_token(&self, scope: AuthScope) -> bool {
        matches!(self.token(scope), Ok(Some(_)))
    }
}
