//! `OrderApi` over HTTP.

use super::client::ApiClient;
use academy_core::auth::AuthScope;
use academy_core::error::Result;
use academy_core::order::{OrderApi, OrderReceipt, PaymentMethod, PlaceOrderRequest};
use reqwest::Method;

pub(crate) const PLACE_ORDER_PATH: &str = "/user/placeOrder";

#[async_trait::async_trait]
impl OrderApi for ApiClient {
    async fn place_order(&self, payment_method: PaymentMethod) -> Result<OrderReceipt> {
        let request = self
            .request(Method::POST, PLACE_ORDER_PATH, AuthScope::EndUser)
            .json(&PlaceOrderRequest { payment_method });

        let receipt: OrderReceipt = self.send_json(request).await?;
        tracing::info!(
            "[ApiClient] Order placed with {}",
            payment_method.as_str()
        );
        Ok(receipt)
    }
}
