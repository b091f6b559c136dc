//! Append-only order history.

use crate::checkout::OrderRecord;
use crate::error::ShopError;
use crate::ids::OrderId;
use crate::money::Amount;

/// Completed orders, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    orders: Vec<OrderRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order to the end of the history.
    pub fn append(&mut self, order: OrderRecord) {
        self.orders.push(order);
    }

    /// All orders in chronological order.
    pub fn all(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Get an order by id.
    pub fn get(&self, id: &OrderId) -> Option<&OrderRecord> {
        self.orders.iter().find(|o| o.id() == id)
    }

    /// Most recent order.
    pub fn latest(&self) -> Option<&OrderRecord> {
        self.orders.last()
    }

    /// Sum of all order totals.
    pub fn lifetime_total(&self) -> Result<Amount, ShopError> {
        Amount::try_sum(self.orders.iter().map(|o| o.total())).ok_or(ShopError::Overflow)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
