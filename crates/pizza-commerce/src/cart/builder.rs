//! Draft line items.
//!
//! A draft collects the selection made in the "add pizza" dialog without
//! checking it. [`LineItemBuilder::build`] is the only validation gate.

use crate::cart::LineItem;
use crate::catalog::{Catalog, CatalogEntry, Size};
use crate::error::ShopError;
use crate::ids::LineItemId;
use tracing::debug;

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// Parse raw quantity text into a positive quantity.
///
/// Non-numeric text, zero and negative numbers all fail with
/// [`ShopError::InvalidQuantity`].
pub fn parse_quantity(raw: &str) -> Result<u32, ShopError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ShopError::InvalidQuantity(raw.to_string()))?;

    if value <= 0 {
        return Err(ShopError::InvalidQuantity(raw.to_string()));
    }
    if value > i64::from(MAX_QUANTITY_PER_ITEM) {
        return Err(ShopError::QuantityExceedsLimit(
            value as u64,
            MAX_QUANTITY_PER_ITEM,
        ));
    }

    Ok(value as u32)
}

/// Pending selection for one cart line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemBuilder {
    item_name: Option<String>,
    size: Option<Size>,
    quantity: String,
    edit_target: Option<LineItemId>,
}

impl LineItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh draft for a menu item.
    ///
    /// Size and quantity are reset and any edit in progress is dropped.
    pub fn select(&mut self, entry: &CatalogEntry) {
        self.item_name = Some(entry.name.clone());
        self.size = None;
        self.quantity.clear();
        self.edit_target = None;
        debug!(item = %entry.name, "selected menu item");
    }

    /// Start a draft that will replace an existing cart line.
    pub fn edit(&mut self, line: &LineItem) {
        self.item_name = Some(line.item_name().to_string());
        self.size = Some(line.size());
        self.quantity = line.quantity().to_string();
        self.edit_target = Some(line.id().clone());
        debug!(line_item_id = %line.id(), "editing cart line");
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = Some(size);
    }

    /// Record quantity text as typed. Nothing is checked until `build`.
    pub fn set_quantity(&mut self, raw: impl Into<String>) {
        self.quantity = raw.into();
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.item_name.as_deref()
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Quantity text as entered.
    pub fn quantity_text(&self) -> &str {
        &self.quantity
    }

    /// The cart line this draft replaces, if editing.
    pub fn edit_target(&self) -> Option<&LineItemId> {
        self.edit_target.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Check if a draft has been started.
    pub fn is_active(&self) -> bool {
        self.item_name.is_some()
    }

    /// Discard the draft.
    pub fn cancel(&mut self) {
        if self.is_active() {
            debug!(item = ?self.item_name, "discarded draft");
        }
        *self = Self::default();
    }

    /// Validate the draft and produce a line item priced from the catalog.
    pub fn build(&self, catalog: &Catalog) -> Result<LineItem, ShopError> {
        let name = self.item_name.as_deref().ok_or(ShopError::NoItemSelected)?;
        let size = self.size.ok_or(ShopError::MissingSize)?;
        let quantity = parse_quantity(&self.quantity)?;
        let unit_price = catalog.lookup(name)?.price_for(size);

        LineItem::new(name, size, quantity, unit_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Amount;

    fn margherita(catalog: &Catalog) -> &CatalogEntry {
        catalog.lookup("Margherita").unwrap()
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 10 ").unwrap(), 10);
        for bad in ["0", "-3", "abc", "", "2.5"] {
            assert!(
                matches!(parse_quantity(bad), Err(ShopError::InvalidQuantity(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_quantity_limit() {
        assert_eq!(parse_quantity("9999").unwrap(), MAX_QUANTITY_PER_ITEM);
        assert_eq!(
            parse_quantity("10000").unwrap_err(),
            ShopError::QuantityExceedsLimit(10000, MAX_QUANTITY_PER_ITEM)
        );
    }

    #[test]
    fn test_build() {
        let catalog = Catalog::builtin();
        let mut builder = LineItemBuilder::new();
        builder.select(margherita(&catalog));
        builder.set_size(Size::Medium);
        builder.set_quantity("2");

        let item = builder.build(&catalog).unwrap();
        assert_eq!(item.item_name(), "Margherita");
        assert_eq!(item.unit_price(), Amount::new(350));
        assert_eq!(item.total_price(), Amount::new(700));
    }

    #[test]
    fn test_build_requires_selection() {
        let builder = LineItemBuilder::new();
        assert_eq!(
            builder.build(&Catalog::builtin()).unwrap_err(),
            ShopError::NoItemSelected
        );
    }

    #[test]
    fn test_build_requires_size() {
        let catalog = Catalog::builtin();
        let mut builder = LineItemBuilder::new();
        builder.select(margherita(&catalog));
        builder.set_quantity("1");
        assert_eq!(builder.build(&catalog).unwrap_err(), ShopError::MissingSize);
    }

    #[test]
    fn test_build_unknown_item() {
        let catalog = Catalog::builtin();
        let mut builder = LineItemBuilder::new();
        builder.select(&CatalogEntry::new(
            "Calzone",
            crate::catalog::SizePrices::new(1, 2, 3),
        ));
        builder.set_size(Size::Small);
        builder.set_quantity("1");
        assert!(matches!(
            builder.build(&catalog),
            Err(ShopError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_select_resets_draft() {
        let catalog = Catalog::builtin();
        let mut builder = LineItemBuilder::new();
        builder.select(margherita(&catalog));
        builder.set_size(Size::Large);
        builder.set_quantity("4");

        builder.select(catalog.lookup("Hawaiian").unwrap());
        assert_eq!(builder.selected_item(), Some("Hawaiian"));
        assert_eq!(builder.size(), None);
        assert_eq!(builder.quantity_text(), "");
    }

    #[test]
    fn test_edit_prefills_and_select_drops_target() {
        let catalog = Catalog::builtin();
        let line = LineItem::new("Pepperoni", Size::Small, 3, Amount::new(250)).unwrap();

        let mut builder = LineItemBuilder::new();
        builder.edit(&line);
        assert!(builder.is_editing());
        assert_eq!(builder.edit_target(), Some(line.id()));
        assert_eq!(builder.size(), Some(Size::Small));
        assert_eq!(builder.quantity_text(), "3");

        builder.select(margherita(&catalog));
        assert!(!builder.is_editing());
    }

    #[test]
    fn test_cancel() {
        let catalog = Catalog::builtin();
        let mut builder = LineItemBuilder::new();
        builder.select(margherita(&catalog));
        builder.set_size(Size::Small);
        builder.cancel();
        assert!(!builder.is_active());
        assert_eq!(builder, LineItemBuilder::default());
    }
}
