//! The end user's own courses.
//!
//! - `model`: purchased courses, watch history and favorites
//! - `api`: the remote endpoints (`LibraryApi`, `FavoritesApi`)

mod api;
mod model;

pub use api::{FavoritesApi, LibraryApi};
pub use model::{Enrollment, FavoriteCourse, HistoryEntry};
