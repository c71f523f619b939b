//! HTTP adapters for the storefront API.
//!
//! `ApiClient` implements every remote trait of `academy-core`
//! (`CartApi`, `AuthApi`, `OrderApi`, `LessonApi`, `LibraryApi`,
//! `FavoritesApi`, `MessagingApi`, `AccountApi`).

mod account_api;
mod auth_api;
mod cart_api;
pub mod client;
mod envelope;
mod lesson_api;
mod library_api;
mod messaging_api;
mod order_api;

pub use client::ApiClient;
pub use reqwest::Method;
