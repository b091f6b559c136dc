//! Menu catalog module.
//!
//! Contains the fixed menu of pizzas and their per-size prices.

mod menu;
mod size;

pub use menu::{Catalog, CatalogEntry, SizePrices};
pub use size::Size;
