//! Domain layer of the Academy storefront client.
//!
//! Holds the models and the traits at the seams between the cart store, the
//! remote API and local storage. Implementations live in
//! `academy-infrastructure`; use cases in `academy-application`.

pub mod account;
pub mod auth;
pub mod cart;
pub mod config;
pub mod course;
pub mod error;
pub mod library;
pub mod messaging;
pub mod order;
pub mod storage;

// Re-export common error type
pub use error::{AcademyError, Result};
