//! Adding courses to the cart and placing orders.

use academy_core::auth::{AuthScope, CredentialStore};
use academy_core::cart::{CartApi, CartStatus, CourseId};
use academy_core::error::{AcademyError, Result};
use academy_core::order::{OrderApi, OrderReceipt, PaymentMethod};
use std::sync::Arc;

use crate::cart_store::SessionCartStore;

/// Cart mutations that go beyond the store's own operations.
///
/// Every successful mutation is followed by a reload of the shared store so
/// all views pick up the server's view of the cart.
pub struct CheckoutUseCase {
    cart: SessionCartStore,
    cart_api: Arc<dyn CartApi>,
    orders: Arc<dyn OrderApi>,
    credentials: Arc<dyn CredentialStore>,
}

impl CheckoutUseCase {
    pub fn new(
        cart: SessionCartStore,
        cart_api: Arc<dyn CartApi>,
        orders: Arc<dyn OrderApi>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            cart,
            cart_api,
            orders,
            credentials,
        }
    }

    pub fn cart(&self) -> &SessionCartStore {
        &self.cart
    }

    /// Adds a course to the server cart and reloads the store.
    ///
    /// Guests are refused before any request is made. Server refusals (for
    /// example a course already in the cart) are returned after the reload.
    pub async fn add_to_cart(&self, course_id: CourseId) -> Result<()> {
        if !self.credentials.has_token(AuthScope::EndUser) {
            return Err(AcademyError::unauthenticated(
                "Login required to add courses to the cart",
            ));
        }

        let outcome = self.cart_api.add_to_cart(course_id).await;
        match &outcome {
            Ok(()) => tracing::info!("[Checkout] Added course {} to cart", course_id),
            Err(e) => tracing::warn!("[Checkout] Failed to add course {}: {}", course_id, e),
        }

        self.cart.reload().await;
        outcome
    }

    /// Places an order for the current cart contents.
    ///
    /// The cart is reloaded first; an empty cart is refused without a
    /// request, and a cart that failed to load is reported as unavailable.
    /// After a successful order the cart is reloaded again.
    pub async fn place_order(&self, payment_method: PaymentMethod) -> Result<OrderReceipt> {
        self.cart.reload().await;

        let snapshot = self.cart.snapshot();
        if snapshot.status == CartStatus::Error {
            return Err(AcademyError::CartUnavailable(
                snapshot.last_error.unwrap_or_default(),
            ));
        }
        if snapshot.is_empty() {
            return Err(AcademyError::EmptyCart);
        }

        let receipt = self.orders.place_order(payment_method).await?;
        tracing::info!(
            "[Checkout] Placed order for {} item(s) via {}",
            snapshot.count(),
            payment_method.as_str()
        );

        self.cart.reload().await;
        Ok(receipt)
    }
}
