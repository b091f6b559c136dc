//! Shopping cart module.
//!
//! Contains line items, the draft builder and the cart store.

mod builder;
mod cart;

pub use builder::{parse_quantity, LineItemBuilder, MAX_QUANTITY_PER_ITEM};
pub use cart::{CartStore, LineItem};
