//! Checkout module.
//!
//! Contains order records, the order history and the checkout processor.

mod history;
mod order;
mod processor;

pub use history::HistoryStore;
pub use order::OrderRecord;
pub use processor::{CheckoutPolicy, CheckoutProcessor, DEFAULT_PAYMENT_METHODS};
