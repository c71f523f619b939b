//! Remote cart API trait.

use super::model::{CartLine, CourseId};
use crate::error::Result;

/// Remote cart endpoint used by the session cart store and checkout.
///
/// Every call is made on behalf of the end user; implementations authorize
/// with the end-user credential only.
#[async_trait::async_trait]
pub trait CartApi: Send + Sync {
    /// Fetches the full cart. A response without a `cart` field is an empty cart.
    async fn fetch_cart(&self) -> Result<Vec<CartLine>>;

    /// Removes the line referencing `course_id`. Any 2xx response is success.
    async fn remove_from_cart(&self, course_id: CourseId) -> Result<()>;

    /// Adds a course to the cart.
    ///
    /// Not used by the store itself: screens add directly and then ask the
    /// store to reload.
    async fn add_to_cart(&self, course_id: CourseId) -> Result<()>;
}
