//! Credential store backed by key-value storage.

use academy_core::auth::{AuthScope, CredentialStore};
use academy_core::error::Result;
use academy_core::storage::KeyValueStore;
use std::sync::Arc;

/// Bearer tokens persisted under the well-known storage keys.
///
/// # Example
///
/// ```ignore
/// use academy_infrastructure::{MemoryStorage, StoredCredentials};
///
/// let credentials = StoredCredentials::new(Arc::new(MemoryStorage::new()));
/// credentials.set_token(AuthScope::EndUser, "eyJ...")?;
/// ```
#[derive(Clone)]
pub struct StoredCredentials {
    storage: Arc<dyn KeyValueStore>,
}

impl StoredCredentials {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }
}

impl CredentialStore for StoredCredentials {
    fn token(&self, scope: AuthScope) -> Result<Option<String>> {
        let token = self.storage.get_item(scope.token_key())?;
        Ok(token.filter(|value| !value.trim().is_empty()))
    }

    fn set_token(&self, scope: AuthScope, token: &str) -> Result<()> {
        self.storage.set_item(scope.token_key(), token)
    }

    fn profile(&self, scope: AuthScope) -> Result<Option<String>> {
        self.storage.get_item(scope.profile_key())
    }

    fn set_profile(&self, scope: AuthScope, value: &str) -> Result<()> {
        self.storage.set_item(scope.profile_key(), value)
    }

    fn clear(&self, scope: AuthScope) -> Result<()> {
        self.storage.remove_item(scope.token_key())?;
        self.storage.remove_item(scope.profile_key())
    }
}
