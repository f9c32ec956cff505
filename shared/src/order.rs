//! Cart and order-slot types
//!
//! These live entirely on the client side: a slot (table or takeaway
//! order) accumulates line items until checkout, then the items move into
//! an immutable history entry. The server only ever sees the line-item
//! snapshot embedded in a payment.

use serde::{Deserialize, Serialize};

use crate::models::{PaymentMethod, Size};

/// One ordered product configuration within an active cart
///
/// `price` is the unit price resolved at add time; later catalog edits do
/// not reach back into existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

impl LineItem {
    /// Two additions merge (summing quantity) when name, note and size all
    /// match; price is deliberately not part of the key — the first
    /// resolved price sticks.
    pub fn merge_key(&self) -> (&str, Option<&str>, Option<Size>) {
        (self.name.as_str(), self.note.as_deref(), self.size)
    }
}

/// Immutable record of one completed checkout for a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub orders: Vec<LineItem>,
    pub total: i64,
    pub method: PaymentMethod,
    /// Unix millis at checkout
    pub time: i64,
}

/// A table or takeaway unit accumulating line items until checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSlot {
    pub id: i64,
    #[serde(default)]
    pub orders: Vec<LineItem>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl OrderSlot {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            orders: Vec::new(),
            history: Vec::new(),
        }
    }

    /// A slot is Active while it holds at least one line item
    pub fn is_active(&self) -> bool {
        !self.orders.is_empty()
    }
}
