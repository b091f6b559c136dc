//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use pizza_commerce::catalog::{Catalog, CatalogEntry, SizePrices};
use pizza_commerce::checkout::{CheckoutPolicy, DEFAULT_PAYMENT_METHODS};
use pizza_commerce::ShopError;
use serde::{Deserialize, Serialize};

use crate::output::DEFAULT_CURRENCY_SYMBOL;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shop display settings.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Checkout rules.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Menu override. Empty means the built-in menu.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<MenuItemConfig>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(path, &content)
    }

    /// Parse config text, choosing the format from the file extension.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Build the catalog this config describes.
    pub fn catalog(&self) -> Result<Catalog, ShopError> {
        if self.menu.is_empty() {
            return Ok(Catalog::builtin());
        }

        Catalog::new(
            self.menu
                .iter()
                .map(|item| {
                    CatalogEntry::new(
                        item.name.clone(),
                        SizePrices::new(item.small, item.medium, item.large),
                    )
                })
                .collect(),
        )
    }

    /// The checkout policy this config describes.
    pub fn policy(&self) -> CheckoutPolicy {
        CheckoutPolicy {
            require_payment_method: self.checkout.require_payment_method,
            accepted_methods: self.checkout.accepted_methods.clone(),
        }
    }
}

/// Shop display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Shop name shown in headers.
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// Symbol printed before amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_shop_name() -> String {
    "PIZZAlicious".to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Reject orders without a payment method.
    #[serde(default = "default_true")]
    pub require_payment_method: bool,

    /// Accepted payment methods. Empty accepts anything.
    #[serde(default = "default_accepted_methods")]
    pub accepted_methods: Vec<String>,

    /// Payment method used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_method: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_accepted_methods() -> Vec<String> {
    DEFAULT_PAYMENT_METHODS.iter().map(|m| m.to_string()).collect()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            require_payment_method: true,
            accepted_methods: default_accepted_methods(),
            default_method: None,
        }
    }
}

/// One menu entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub name: String,
    pub small: u64,
    pub medium: u64,
    pub large: u64,
}

/// Generate a default pizza.toml config file.
pub fn generate_default_config() -> String {
    r#"# PIZZAlicious shop configuration

[shop]
name = "PIZZAlicious"
currency_symbol = "₱"

[checkout]
require_payment_method = true
accepted_methods = ["GCash", "Cash on Delivery"]
# default_method = "Cash on Delivery"

# Uncomment to replace the built-in menu.
# [[menu]]
# name = "Margherita"
# small = 200
# medium = 350
# large = 500
"#
    .to_string()
}
