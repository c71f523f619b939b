//! Infrastructure layer of the Academy storefront client.
//!
//! Implements the `academy-core` seams: the HTTP API client, key-value
//! storage backends, the credential and progress stores, configuration
//! loading and tracing setup.

pub mod config_service;
pub mod credential_store;
pub mod http;
pub mod paths;
pub mod progress_repository;
pub mod storage;
pub mod telemetry;

pub use crate::config_service::ConfigService;
pub use crate::credential_store::StoredCredentials;
pub use crate::http::ApiClient;
pub use crate::progress_repository::KeyValueProgressRepository;
pub use crate::storage::{JsonFileStorage, MemoryStorage};
