//! Place an order in one go.

use std::fmt;

use anyhow::{bail, Context as _, Result};
use pizza_commerce::catalog::Size;
use pizza_commerce::cart::LineItem;
use pizza_commerce::{Amount, Session};
use serde::Serialize;

use super::OrderArgs;
use crate::context::Context;

/// A parsed `--item` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub name: String,
    pub size: Size,
    /// Quantity text, validated by the session on commit.
    pub quantity: String,
}

impl ItemSpec {
    /// Parse "Name:Size[:Quantity]". Quantity defaults to 1.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut parts = spec.splitn(3, ':');
        let name = parts.next().unwrap_or_default().trim();
        let size = parts.next().map(str::trim);

        let (name, size) = match (name, size) {
            ("", _) | (_, None) => {
                bail!("Invalid item '{}': expected Name:Size[:Quantity]", spec)
            }
            (name, Some(size)) => (name, size),
        };

        let size: Size = size
            .parse()
            .with_context(|| format!("Invalid item '{}'", spec))?;
        let quantity = parts.next().unwrap_or("1").to_string();

        Ok(Self {
            name: name.to_string(),
            size,
            quantity,
        })
    }
}

impl fmt::Display for ItemSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) x {}", self.name, self.size, self.quantity.trim())
    }
}

/// Push one spec through the draft and into the cart.
fn add_to_cart(session: &mut Session, spec: &ItemSpec) -> Result<()> {
    session
        .select(&spec.name)
        .with_context(|| format!("Could not add {}", spec))?;
    session.set_size(spec.size);
    session.set_quantity(spec.quantity.as_str());

    if let Err(e) = session.commit() {
        session.cancel();
        return Err(e).with_context(|| format!("Could not add {}", spec));
    }
    Ok(())
}

/// JSON shape of a cart that was not checked out.
#[derive(Debug, Serialize)]
struct CartPreview<'a> {
    items: &'a [LineItem],
    total: Amount,
}

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let specs = args
        .items
        .iter()
        .map(|s| ItemSpec::parse(s))
        .collect::<Result<Vec<_>>>()?;

    let mut session = ctx.session()?;
    for spec in &specs {
        add_to_cart(&mut session, spec)?;
        ctx.output.debug(&format!("Added {}", spec));
    }

    let payment = args
        .payment
        .or_else(|| ctx.config.checkout.default_method.clone())
        .unwrap_or_default();

    if args.dry_run {
        let cart = session.cart();
        let total = cart.total()?;
        if ctx.output.is_json() {
            return ctx.output.json(&CartPreview {
                items: cart.items(),
                total,
            });
        }
        ctx.output.header("Your cart");
        ctx.output.cart(cart.items(), total);
        ctx.output.info("Dry run - no order placed");
        return Ok(());
    }

    let order = session.checkout(&payment).context("Checkout failed")?;

    if ctx.output.is_json() {
        return ctx.output.json(&order);
    }

    ctx.output.header("Order Placed!");
    ctx.output.order(&order);
    ctx.output.success(&format!(
        "Your order has been placed using {}. Thank you for ordering from {}.",
        order.payment_method(),
        ctx.config.shop.name
    ));

    Ok(())
}
