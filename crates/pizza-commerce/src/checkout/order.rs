//! Order records.

use crate::cart::LineItem;
use crate::ids::OrderId;
use crate::money::Amount;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A completed checkout.
///
/// The items are an owned copy of the cart at checkout time, so later cart
/// changes are never visible here. Records have no mutators.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderRecord {
    id: OrderId,
    placed_at: DateTime<Utc>,
    total: Amount,
    payment_method: String,
    items: Vec<LineItem>,
}

impl OrderRecord {
    pub(crate) fn new(
        total: Amount,
        payment_method: impl Into<String>,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            total,
            payment_method: payment_method.into(),
            items,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// When the order was placed.
    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Sum of the line totals.
    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    /// Lines in cart order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get total pizza count.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }
}
