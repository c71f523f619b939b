//! Authorization scope of an outbound request.

use serde::{Deserialize, Serialize};

/// Path prefixes that belong to the admin and super-admin consoles.
pub const ADMIN_PATH_PREFIXES: [&str; 2] = ["/admin", "/superadmin"];

/// Which credential authorizes a request.
///
/// End-user and admin credentials are mutually exclusive per logical session
/// but may coexist in storage, so every request names its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScope {
    EndUser,
    Admin,
}

impl AuthScope {
    /// Infers the scope from the navigational context and the endpoint path.
    ///
    /// Either signal pointing at the admin area selects `Admin`. Kept for
    /// call sites that still mirror the storefront's ambient selection;
    /// new code passes a scope explicitly.
    pub fn infer(navigation_path: &str, endpoint_path: &str) -> Self {
        if is_admin_path(navigation_path) || is_admin_path(endpoint_path) {
            AuthScope::Admin
        } else {
            AuthScope::EndUser
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, AuthScope::Admin)
    }
}

fn is_admin_path(path: &str) -> bool {
    ADMIN_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}
