//! Cart and order lifecycle for the PIZZAlicious shop.
//!
//! This crate holds the ordering core a front end drives:
//!
//! - **Catalog**: the fixed menu with per-size prices
//! - **Cart**: draft line items, validation, the cart store
//! - **Checkout**: turning a cart into an order record, order history
//! - **Session**: one customer's owned state tying the above together
//!
//! # Example
//!
//! ```rust
//! use pizza_commerce::prelude::*;
//!
//! let mut session = Session::new(Catalog::builtin());
//!
//! session.select("Margherita")?;
//! session.set_size(Size::Medium);
//! session.set_quantity("2");
//! session.commit()?;
//!
//! assert_eq!(session.cart().total()?, Amount::new(700));
//!
//! let order = session.checkout("GCash")?;
//! assert_eq!(order.total(), Amount::new(700));
//! assert!(session.cart().is_empty());
//! # Ok::<(), ShopError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;

pub use error::{ErrorKind, ShopError};
pub use ids::*;
pub use money::Amount;
pub use session::Session;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{ErrorKind, ShopError};
    pub use crate::ids::*;
    pub use crate::money::Amount;
    pub use crate::session::Session;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogEntry, Size, SizePrices};

    // Cart
    pub use crate::cart::{
        parse_quantity, CartStore, LineItem, LineItemBuilder, MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{CheckoutPolicy, CheckoutProcessor, HistoryStore, OrderRecord};
}
