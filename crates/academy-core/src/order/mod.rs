//! Order domain module.

mod api;
mod model;

pub use api::OrderApi;
pub use model::{OrderReceipt, PaymentMethod, PlaceOrderRequest};
