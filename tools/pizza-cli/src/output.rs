//! Terminal and JSON rendering for the pizza CLI.
//!
//! Human output is styled with `console`; in `--json` mode every decorated
//! message is suppressed and only [`Output::json`] payloads reach stdout.
//! Errors always go to stderr, as a `{"error": ...}` object in JSON mode.

use anyhow::{Context as _, Result};
use console::{style, StyledObject};
use pizza_commerce::cart::LineItem;
use pizza_commerce::catalog::{CatalogEntry, Size};
use pizza_commerce::checkout::OrderRecord;
use pizza_commerce::Amount;
use serde::Serialize;

/// Symbol used when no config overrides it.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "\u{20b1}";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Output sink for one CLI invocation.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    currency: String,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            currency: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Use a different currency symbol for prices.
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn marked(&self, mark: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", mark, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.marked(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.marked(style("✓").green(), msg);
    }

    /// Print text as is.
    pub fn line(&self, msg: &str) {
        if !self.json {
            println!("{}", msg);
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print one row of left-aligned columns.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let row: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, width)| format!("{:width$}", col, width = *width))
            .collect();
        println!("  {}", row.join("  ").trim_end());
    }

    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", error_json(msg));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Print a value as pretty JSON on stdout.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let text =
            serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
        println!("{}", text);
        Ok(())
    }

    /// Format an amount with the currency symbol.
    pub fn price(&self, amount: Amount) -> String {
        format!("{}{}", self.currency, amount)
    }

    /// Prices of a menu entry, smallest size first.
    pub fn menu_prices(&self, entry: &CatalogEntry) -> [String; 3] {
        Size::ALL.map(|size| self.price(entry.price_for(size)))
    }

    /// One-line description of a cart line.
    pub fn describe_line(&self, item: &LineItem) -> String {
        format!(
            "{} - {} x {} ({})",
            item.item_name(),
            item.size(),
            item.quantity(),
            self.price(item.total_price())
        )
    }

    /// Print cart lines and their total.
    pub fn cart(&self, items: &[LineItem], total: Amount) {
        if items.is_empty() {
            self.info("Your cart is empty");
            return;
        }
        for item in items {
            self.list_item(&self.describe_line(item));
        }
        self.kv("Total", &self.price(total));
    }

    /// Print a placed order.
    pub fn order(&self, order: &OrderRecord) {
        self.kv("Order", order.id().as_str());
        self.kv(
            "Order Date",
            &order.placed_at().format(TIMESTAMP_FORMAT).to_string(),
        );
        let method = match order.payment_method().trim() {
            "" => "(none)",
            _ => order.payment_method(),
        };
        self.kv("Payment", method);
        self.cart(order.items(), order.total());
    }
}

/// The stderr line for an error in JSON mode.
fn error_json(msg: &str) -> String {
    serde_json::json!({ "error": msg }).to_string()
}
