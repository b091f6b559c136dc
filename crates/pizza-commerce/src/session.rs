//! An ordering session.
//!
//! [`Session`] owns everything one customer touches: the menu, the draft
//! being filled in, the cart and the order history. Front ends forward user
//! intents to it and read the views back for rendering.

use crate::cart::{CartStore, LineItemBuilder};
use crate::catalog::{Catalog, Size};
use crate::checkout::{CheckoutPolicy, CheckoutProcessor, HistoryStore, OrderRecord};
use crate::error::ShopError;
use crate::ids::LineItemId;

/// Owned session state.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    draft: LineItemBuilder,
    cart: CartStore,
    history: HistoryStore,
    checkout: CheckoutProcessor,
}

impl Session {
    /// Create a session over a catalog with the default checkout policy.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_policy(catalog, CheckoutPolicy::default())
    }

    pub fn with_policy(catalog: Catalog, policy: CheckoutPolicy) -> Self {
        Self {
            catalog,
            draft: LineItemBuilder::new(),
            cart: CartStore::new(),
            history: HistoryStore::new(),
            checkout: CheckoutProcessor::new(policy),
        }
    }

    /// Start a draft for a menu item.
    pub fn select(&mut self, item_name: &str) -> Result<(), ShopError> {
        let entry = self.catalog.lookup(item_name)?;
        self.draft.select(entry);
        Ok(())
    }

    /// Start a draft that edits an existing cart line.
    pub fn edit(&mut self, line_id: &LineItemId) -> Result<(), ShopError> {
        let line = self
            .cart
            .get(line_id)
            .ok_or_else(|| ShopError::LineItemNotFound(line_id.to_string()))?;
        self.draft.edit(line);
        Ok(())
    }

    pub fn set_size(&mut self, size: Size) {
        self.draft.set_size(size);
    }

    pub fn set_quantity(&mut self, raw: impl Into<String>) {
        self.draft.set_quantity(raw);
    }

    /// Validate the draft and put it in the cart.
    ///
    /// On success the draft is cleared and the id of the added or replaced
    /// line is returned. On failure the draft is kept so it can be corrected.
    pub fn commit(&mut self) -> Result<LineItemId, ShopError> {
        let item = self.draft.build(&self.catalog)?;
        let id = self.cart.add_or_update(item, self.draft.edit_target())?;
        self.draft.cancel();
        Ok(id)
    }

    /// Abandon the draft.
    pub fn cancel(&mut self) {
        self.draft.cancel();
    }

    /// Delete a cart line. Absent ids are ignored.
    pub fn remove(&mut self, line_id: &LineItemId) -> bool {
        self.cart.remove(line_id)
    }

    /// Place an order for the whole cart.
    pub fn checkout(&mut self, payment_method: &str) -> Result<OrderRecord, ShopError> {
        self.checkout
            .checkout(&mut self.cart, &mut self.history, payment_method)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn draft(&self) -> &LineItemBuilder {
        &self.draft
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn policy(&self) -> &CheckoutPolicy {
        self.checkout.policy()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
