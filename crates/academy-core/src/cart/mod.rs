//! Cart domain module.
//!
//! - `model`: cart snapshot types (`CartSnapshot`, `CartLine`, `CartStatus`)
//! - `api`: the remote cart contract (`CartApi`)

mod api;
mod model;

pub use api::CartApi;
pub use model::{CartLine, CartLineId, CartSnapshot, CartStatus, CourseId, CourseSummary, Price};
