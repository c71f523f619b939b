//! Authentication domain module.
//!
//! - `scope`: which credential authorizes a request (`AuthScope`)
//! - `credential`: persisted bearer tokens (`CredentialStore`) and storage keys
//! - `api`: login / register / logout endpoints (`AuthApi`)

mod api;
mod credential;
mod scope;

pub use api::{AuthApi, LoginRequest, LoginResponse};
pub use credential::{
    ADMIN_ROLE_KEY, ADMIN_TOKEN_KEY, AUTH_TOKEN_KEY, AUTH_USER_KEY, CredentialStore,
};
pub use scope::{ADMIN_PATH_PREFIXES, AuthScope};
