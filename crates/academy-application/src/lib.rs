//! Application layer of the Academy storefront client.
//!
//! Use cases coordinating the domain traits of `academy-core` with the
//! adapters of `academy-infrastructure`:
//!
//! - `cart_store`: the session-wide cart shared by every view
//! - `checkout`: adding courses and placing orders
//! - `auth_session`: login and logout for end users and admins
//! - `course_player`: lesson navigation and local progress
//! - `library`: purchased courses, history and favorites
//! - `messaging`: inbox and conversations
//! - `bootstrap`: wiring everything from configuration

pub mod auth_session;
pub mod bootstrap;
pub mod cart_store;
pub mod checkout;
pub mod course_player;
pub mod library;
pub mod messaging;

#[cfg(test)]
mod test_support;

pub use auth_session::AuthSessionUseCase;
pub use bootstrap::AcademyApp;
pub use cart_store::SessionCartStore;
pub use checkout::CheckoutUseCase;
pub use course_player::CoursePlayer;
pub use library::LibraryUseCase;
pub use messaging::{Conversation, MessagingUseCase};
