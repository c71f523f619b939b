//! Order API trait.

use super::model::{OrderReceipt, PaymentMethod};
use crate::error::Result;

/// Remote order endpoint, authorized as the end user.
#[async_trait::async_trait]
pub trait OrderApi: Send + Sync {
    /// Turns the server-side cart into an order.
    async fn place_order(&self, payment_method: PaymentMethod) -> Result<OrderReceipt>;
}
