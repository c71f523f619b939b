//! Cart domain model.
//!
//! The cart is always owned by the session cart store and replaced wholesale
//! from server responses; these types carry no mutation helpers on purpose.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a course.
pub type CourseId = u64;

/// Server-assigned identifier of a cart entry.
pub type CartLineId = u64;

/// A price as returned by the server.
///
/// The backend serializes decimals either as JSON numbers or as numeric
/// strings (`"149.90"`), so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    /// Numeric value of the price, `None` if the text is not a number.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Number(value) => Some(*value),
            Price::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }
}

/// Denormalized course attributes captured when the cart was fetched.
///
/// Informational only; never authoritative for pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: CourseId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
}

/// One entry of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Cart entry id, stable across reloads for the same entry.
    pub id: CartLineId,
    /// Referenced course; at most one line per course.
    pub course_id: CourseId,
    /// Course snapshot. Lines whose course was deleted come back without it.
    #[serde(default)]
    pub course: Option<CourseSummary>,
}

impl CartLine {
    /// Price of the line, treating a missing or unparsable price as zero.
    pub fn price(&self) -> f64 {
        self.course
            .as_ref()
            .and_then(|course| course.price.as_ref())
            .and_then(Price::amount)
            .unwrap_or(0.0)
    }
}

/// Load status of the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    /// Never loaded.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// Items reflect the last applied server response (or the guest cart).
    Ready,
    /// The last load failed; items are empty.
    Error,
}

/// Complete view of the cart at one point in time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartLine>,
    pub status: CartStatus,
    /// Present only when `status` is `Error`.
    pub last_error: Option<String>,
    /// When the last server response was applied.
    pub synced_at: Option<DateTime<Utc>>,
}

impl CartSnapshot {
    /// Empty cart in `Ready` state, used for guests and after logout.
    pub fn guest() -> Self {
        Self {
            status: CartStatus::Ready,
            ..Self::default()
        }
    }

    /// Cart populated from a successful server response.
    pub fn synced(items: Vec<CartLine>) -> Self {
        Self {
            items,
            status: CartStatus::Ready,
            last_error: None,
            synced_at: Some(Utc::now()),
        }
    }

    /// Empty cart after a failed load.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            status: CartStatus::Error,
            last_error: Some(error.into()),
            synced_at: None,
        }
    }

    /// Same items with a load in flight.
    pub fn loading(&self) -> Self {
        Self {
            items: self.items.clone(),
            status: CartStatus::Loading,
            last_error: None,
            synced_at: self.synced_at,
        }
    }

    /// Number of lines. Always derived from `items`.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, course_id: CourseId) -> bool {
        self.items.iter().any(|line| line.course_id == course_id)
    }

    /// Sum of line prices.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartLine::price).sum()
    }
}
