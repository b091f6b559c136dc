//! Shop error types.

use thiserror::Error;

/// Errors that can occur while building a cart or placing an order.
///
/// Every variant is recoverable: the operation that produced it left the
/// catalog, cart and history exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// Menu item not found.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Cart line not found.
    #[error("Item not in cart: {0}")]
    LineItemNotFound(String),

    /// No menu item has been selected for the draft.
    #[error("No item selected")]
    NoItemSelected,

    /// The draft has no size.
    #[error("Please select a size")]
    MissingSize,

    /// Quantity text is not a positive whole number.
    #[error("Quantity must be a valid positive number, got {0:?}")]
    InvalidQuantity(String),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u64, u32),

    /// Unknown size name.
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Checkout attempted with nothing in the cart.
    #[error("No items in your cart. Please add pizzas to your cart.")]
    EmptyCart,

    /// Checkout attempted without choosing how to pay.
    #[error("Please choose a payment method")]
    MissingPaymentMethod,

    /// Payment method not accepted by the checkout policy.
    #[error("Unsupported payment method: {0}")]
    UnsupportedPaymentMethod(String),

    /// Menu definition rejected.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in price calculation")]
    Overflow,
}

/// The three user-facing error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input that the user can correct (size, quantity, payment).
    Validation,
    /// A name or id that does not resolve.
    NotFound,
    /// Checkout of an empty cart.
    EmptyCart,
}

impl ShopError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShopError::ItemNotFound(_) | ShopError::LineItemNotFound(_) => ErrorKind::NotFound,
            ShopError::EmptyCart => ErrorKind::EmptyCart,
            ShopError::NoItemSelected
            | ShopError::MissingSize
            | ShopError::InvalidQuantity(_)
            | ShopError::QuantityExceedsLimit(..)
            | ShopError::InvalidSize(_)
            | ShopError::MissingPaymentMethod
            | ShopError::UnsupportedPaymentMethod(_)
            | ShopError::InvalidCatalog(_)
            | ShopError::Overflow => ErrorKind::Validation,
        }
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
