//! Cart to order conversion.

use crate::cart::CartStore;
use crate::checkout::{HistoryStore, OrderRecord};
use crate::error::ShopError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Payment methods offered at the counter.
pub const DEFAULT_PAYMENT_METHODS: [&str; 2] = ["GCash", "Cash on Delivery"];

/// Rules for the payment method given at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutPolicy {
    /// Reject blank payment methods.
    pub require_payment_method: bool,
    /// Accepted methods. Empty accepts anything.
    pub accepted_methods: Vec<String>,
}

impl CheckoutPolicy {
    /// Accept any payment method, including none at all. Methods are stored
    /// exactly as given.
    pub fn permissive() -> Self {
        Self {
            require_payment_method: false,
            accepted_methods: Vec::new(),
        }
    }

    /// Check a payment method.
    ///
    /// Methods matched against `accepted_methods` are returned trimmed; with
    /// no accepted list the method is returned as given.
    pub fn validate<'a>(&self, payment_method: &'a str) -> Result<&'a str, ShopError> {
        let trimmed = payment_method.trim();

        if trimmed.is_empty() && self.require_payment_method {
            return Err(ShopError::MissingPaymentMethod);
        }

        if self.accepted_methods.is_empty() || trimmed.is_empty() {
            return Ok(payment_method);
        }

        if self.accepted_methods.iter().any(|m| m == trimmed) {
            Ok(trimmed)
        } else {
            Err(ShopError::UnsupportedPaymentMethod(trimmed.to_string()))
        }
    }
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            require_payment_method: true,
            accepted_methods: DEFAULT_PAYMENT_METHODS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Turns a cart into an order record.
#[derive(Debug, Clone, Default)]
pub struct CheckoutProcessor {
    policy: CheckoutPolicy,
}

impl CheckoutProcessor {
    pub fn new(policy: CheckoutPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CheckoutPolicy {
        &self.policy
    }

    /// Place an order for everything in the cart.
    ///
    /// Every check runs before anything is touched: on error the cart and
    /// history are unchanged, on success the record is appended and the cart
    /// emptied.
    pub fn checkout(
        &self,
        cart: &mut CartStore,
        history: &mut HistoryStore,
        payment_method: &str,
    ) -> Result<OrderRecord, ShopError> {
        if cart.is_empty() {
            warn!("checkout rejected: cart is empty");
            return Err(ShopError::EmptyCart);
        }

        let method = self
            .policy
            .validate(payment_method)
            .inspect_err(|e| warn!(error = %e, "checkout rejected"))?;
        let total = cart.total()?;

        let record = OrderRecord::new(total, method, cart.items().to_vec());
        history.append(record.clone());
        cart.clear();

        info!(
            order_id = %record.id(),
            total = %record.total(),
            lines = record.items().len(),
            payment_method = record.payment_method(),
            "order placed"
        );

        Ok(record)
    }
}
