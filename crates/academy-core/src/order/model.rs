//! Order domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payment methods accepted at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    BankTransfer,
    Cash,
}

impl PaymentMethod {
    /// Wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Cash => "cash",
        }
    }
}

/// Body of `POST /user/placeOrder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub payment_method: PaymentMethod,
}

/// Response of a placed order. The server's shape is not fixed, so the body
/// is kept as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderReceipt(pub Value);

impl OrderReceipt {
    /// Server message, when present.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }
}
