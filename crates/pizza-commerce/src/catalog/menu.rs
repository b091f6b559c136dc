//! Catalog entries and the read-only catalog.

use crate::catalog::Size;
use crate::error::ShopError;
use crate::money::Amount;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unit price for each size of one menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePrices {
    pub small: Amount,
    pub medium: Amount,
    pub large: Amount,
}

impl SizePrices {
    pub fn new(small: u64, medium: u64, large: u64) -> Self {
        Self {
            small: Amount::new(small),
            medium: Amount::new(medium),
            large: Amount::new(large),
        }
    }

    /// Get the price for a size.
    pub fn get(&self, size: Size) -> Amount {
        match size {
            Size::Small => self.small,
            Size::Medium => self.medium,
            Size::Large => self.large,
        }
    }

    fn all_positive(&self) -> bool {
        Size::ALL.iter().all(|s| !self.get(*s).is_zero())
    }
}

/// A purchasable menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Item name, the catalog key.
    pub name: String,
    /// Per-size unit prices.
    pub prices: SizePrices,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, prices: SizePrices) -> Self {
        Self {
            name: name.into(),
            prices,
        }
    }

    /// Unit price for a size.
    pub fn price_for(&self, size: Size) -> Amount {
        self.prices.get(size)
    }
}

/// Fixed, read-only menu.
///
/// Entries keep their definition order for display; lookups go through a
/// name index.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting blank names, duplicate names and
    /// non-positive prices.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, ShopError> {
        let mut index = HashMap::with_capacity(entries.len());

        for (pos, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ShopError::InvalidCatalog(format!(
                    "entry {} has an empty name",
                    pos + 1
                )));
            }
            if !entry.prices.all_positive() {
                return Err(ShopError::InvalidCatalog(format!(
                    "{} must have a positive price for every size",
                    entry.name
                )));
            }
            if index.insert(entry.name.clone(), pos).is_some() {
                return Err(ShopError::InvalidCatalog(format!(
                    "duplicate item: {}",
                    entry.name
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// The house menu.
    pub fn builtin() -> Self {
        let entries = vec![
            CatalogEntry::new("Margherita", SizePrices::new(200, 350, 500)),
            CatalogEntry::new("Pepperoni", SizePrices::new(250, 400, 600)),
            CatalogEntry::new("BBQ Chicken", SizePrices::new(300, 450, 700)),
            CatalogEntry::new("Spinach Dip", SizePrices::new(220, 370, 520)),
            CatalogEntry::new("Hawaiian", SizePrices::new(230, 380, 550)),
            CatalogEntry::new("Veggie Delight", SizePrices::new(200, 330, 480)),
        ];
        let index = entries
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.name.clone(), pos))
            .collect();
        Self { entries, index }
    }

    /// Look up an item by name.
    pub fn lookup(&self, name: &str) -> Result<&CatalogEntry, ShopError> {
        self.index
            .get(name)
            .and_then(|pos| self.entries.get(*pos))
            .ok_or_else(|| ShopError::ItemNotFound(name.to_string()))
    }

    /// Unit price of an item in a size.
    pub fn price_of(&self, name: &str, size: Size) -> Result<Amount, ShopError> {
        self.lookup(name).map(|e| e.price_for(size))
    }

    /// All entries in menu order.
    pub fn all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
