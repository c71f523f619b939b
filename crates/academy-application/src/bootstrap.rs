//! Wiring of the client from configuration.

use academy_core::auth::CredentialStore;
use academy_core::cart::CourseId;
use academy_core::config::ClientConfig;
use academy_core::course::ProgressRepository;
use academy_core::error::Result;
use academy_core::storage::KeyValueStore;
use academy_infrastructure::{
    ApiClient, ConfigService, JsonFileStorage, KeyValueProgressRepository, MemoryStorage,
    StoredCredentials,
};
use std::sync::Arc;

use crate::auth_session::AuthSessionUseCase;
use crate::cart_store::SessionCartStore;
use crate::checkout::CheckoutUseCase;
use crate::course_player::CoursePlayer;
use crate::library::LibraryUseCase;
use crate::messaging::MessagingUseCase;

/// A fully wired client session.
///
/// One instance backs the whole application: every view shares its cart
/// store, so a change made anywhere is seen everywhere.
pub struct AcademyApp {
    api: ApiClient,
    credentials: Arc<dyn CredentialStore>,
    progress: Arc<dyn ProgressRepository>,
    cart: SessionCartStore,
    checkout: CheckoutUseCase,
    auth: AuthSessionUseCase,
    library: LibraryUseCase,
    messaging: MessagingUseCase,
}

impl AcademyApp {
    /// Wires every component over the given storage backend.
    pub fn new(config: ClientConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let credentials: Arc<dyn CredentialStore> =
            Arc::new(StoredCredentials::new(storage.clone()));
        let progress: Arc<dyn ProgressRepository> =
            Arc::new(KeyValueProgressRepository::new(storage));
        let api = ApiClient::new(config, credentials.clone())?;
        let shared_api = Arc::new(api.clone());

        let cart = SessionCartStore::new(shared_api.clone(), credentials.clone());
        let checkout = CheckoutUseCase::new(
            cart.clone(),
            shared_api.clone(),
            shared_api.clone(),
            credentials.clone(),
        );
        let auth = AuthSessionUseCase::new(shared_api.clone(), credentials.clone(), cart.clone());
        let library = LibraryUseCase::new(shared_api.clone(), shared_api.clone());
        let messaging = MessagingUseCase::new(shared_api);

        Ok(Self {
            api,
            credentials,
            progress,
            cart,
            checkout,
            auth,
            library,
            messaging,
        })
    }

    /// Client persisting credentials and progress in the JSON storage file.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let storage = JsonFileStorage::for_config(&config)?;
        tracing::info!("[AcademyApp] Using storage file {}", storage.path().display());
        Self::new(config, Arc::new(storage))
    }

    /// Client configured from `config.toml` and `ACADEMY_*` variables.
    pub fn from_config_service(service: &ConfigService) -> Result<Self> {
        let config = service.load()?;
        tracing::info!("[AcademyApp] Loaded configuration from {}", service.path().display());
        Self::from_config(config)
    }

    /// Client configured from the platform config directory.
    pub fn from_default_config() -> Result<Self> {
        Self::from_config_service(&ConfigService::new()?)
    }

    /// Client that keeps everything in memory.
    pub fn ephemeral(config: ClientConfig) -> Result<Self> {
        Self::new(config, Arc::new(MemoryStorage::new()))
    }

    /// Loads the cart once for the session. Call when the application starts.
    pub async fn start(&self) {
        self.cart.load().await;
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    pub fn cart(&self) -> &SessionCartStore {
        &self.cart
    }

    pub fn checkout(&self) -> &CheckoutUseCase {
        &self.checkout
    }

    pub fn auth(&self) -> &AuthSessionUseCase {
        &self.auth
    }

    pub fn library(&self) -> &LibraryUseCase {
        &self.library
    }

    pub fn messaging(&self) -> &MessagingUseCase {
        &self.messaging
    }

    /// Opens a purchased course for playback.
    pub async fn open_course(&self, course_id: CourseId) -> Result<CoursePlayer> {
        CoursePlayer::open(
            Arc::new(self.api.clone()),
            self.progress.clone(),
            course_id,
        )
        .await
    }
}
