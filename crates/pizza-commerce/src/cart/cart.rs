//! Cart and line item types.

use crate::catalog::Size;
use crate::error::ShopError;
use crate::ids::LineItemId;
use crate::money::Amount;
use serde::Serialize;
use tracing::debug;

/// A configured cart entry.
///
/// Prices are derived at construction from the unit price and quantity and
/// cannot be edited afterwards; changing a line means replacing it.
///
/// Lines only come out of [`LineItemBuilder::build`], which prices them from
/// the catalog. There is no public constructor:
///
/// ```compile_fail
/// use pizza_commerce::prelude::*;
///
/// let forged = LineItem::new("Calzone", Size::Large, 1, Amount::new(1));
/// ```
///
/// [`LineItemBuilder::build`]: crate::cart::LineItemBuilder::build
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineItem {
    id: LineItemId,
    item_name: String,
    size: Size,
    quantity: u32,
    unit_price: Amount,
    total_price: Amount,
}

impl LineItem {
    /// Create a new line item.
    ///
    /// Returns an error if quantity is zero or the total overflows.
    pub(crate) fn new(
        item_name: impl Into<String>,
        size: Size,
        quantity: u32,
        unit_price: Amount,
    ) -> Result<Self, ShopError> {
        if quantity == 0 {
            return Err(ShopError::InvalidQuantity(quantity.to_string()));
        }
        let total_price = unit_price
            .try_multiply(quantity)
            .ok_or(ShopError::Overflow)?;
        Ok(Self {
            id: LineItemId::generate(),
            item_name: item_name.into(),
            size,
            quantity,
            unit_price,
            total_price,
        })
    }

    pub fn id(&self) -> &LineItemId {
        &self.id
    }

    /// Name of the catalog entry this line was built from.
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Amount {
        self.unit_price
    }

    /// unit_price * quantity.
    pub fn total_price(&self) -> Amount {
        self.total_price
    }

    fn with_id(mut self, id: LineItemId) -> Self {
        self.id = id;
        self
    }
}

/// The user's current, uncommitted cart.
///
/// Lines are kept in insertion order and ids are unique within the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line, or replace the line with id `target`.
    ///
    /// Without a target the item is appended under a freshly generated id.
    /// With a target the existing line is replaced in place and keeps its id
    /// and position; an unknown target leaves the cart unchanged and
    /// returns [`ShopError::LineItemNotFound`].
    pub fn add_or_update(
        &mut self,
        item: LineItem,
        target: Option<&LineItemId>,
    ) -> Result<LineItemId, ShopError> {
        match target {
            Some(target) => {
                let slot = self
                    .items
                    .iter_mut()
                    .find(|i| &i.id == target)
                    .ok_or_else(|| ShopError::LineItemNotFound(target.to_string()))?;
                *slot = item.with_id(target.clone());
                debug!(
                    line_item_id = %target,
                    item = slot.item_name(),
                    size = %slot.size(),
                    quantity = slot.quantity(),
                    "updated cart line"
                );
                Ok(target.clone())
            }
            None => {
                let item = item.with_id(LineItemId::generate());
                let id = item.id.clone();
                debug!(
                    line_item_id = %id,
                    item = item.item_name(),
                    size = %item.size(),
                    quantity = item.quantity(),
                    "added cart line"
                );
                self.items.push(item);
                Ok(id)
            }
        }
    }

    /// Remove a line. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(line_item_id = %id, "removed cart line");
        }
        removed
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by id.
    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Sum of line totals; zero for an empty cart.
    pub fn total(&self) -> Result<Amount, ShopError> {
        Amount::try_sum(self.items.iter().map(|i| i.total_price)).ok_or(ShopError::Overflow)
    }

    /// Total number of pizzas (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
