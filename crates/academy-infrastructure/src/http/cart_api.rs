//! `CartApi` over HTTP.

use super::client::ApiClient;
use academy_core::auth::AuthScope;
use academy_core::cart::{CartApi, CartLine, CourseId};
use academy_core::error::Result;
use reqwest::Method;
use serde::{Deserialize, Serialize};

pub(crate) const VIEW_CART_PATH: &str = "/user/viewCart";
pub(crate) const ADD_TO_CART_PATH: &str = "/user/addToCart";

pub(crate) fn remove_from_cart_path(course_id: CourseId) -> String {
    format!("/user/deleteFromCart/{}", course_id)
}

/// `GET /user/viewCart` body. A missing or null `cart` is an empty cart.
#[derive(Debug, Deserialize)]
struct CartEnvelope {
    #[serde(default)]
    cart: Option<Vec<CartLine>>,
}

#[derive(Debug, Serialize)]
struct AddToCartRequest {
    course_id: CourseId,
}

#[async_trait::async_trait]
impl CartApi for ApiClient {
    async fn fetch_cart(&self) -> Result<Vec<CartLine>> {
        let request = self.request(Method::GET, VIEW_CART_PATH, AuthScope::EndUser);
        let envelope: CartEnvelope = self.send_json(request).await?;
        let items = envelope.cart.unwrap_or_default();

        tracing::debug!("[ApiClient] Fetched cart with {} line(s)", items.len());
        Ok(items)
    }

    async fn remove_from_cart(&self, course_id: CourseId) -> Result<()> {
        let request = self.request(
            Method::DELETE,
            &remove_from_cart_path(course_id),
            AuthScope::EndUser,
        );
        self.send(request).await?;
        Ok(())
    }

    async fn add_to_cart(&self, course_id: CourseId) -> Result<()> {
        let request = self
            .request(Method::POST, ADD_TO_CART_PATH, AuthScope::EndUser)
            .json(&AddToCartRequest { course_id });
        self.send(request).await?;
        Ok(())
    }
}
