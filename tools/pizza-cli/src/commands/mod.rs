//! CLI command implementations.

pub mod config;
pub mod menu;
pub mod order;
pub mod shell;

use clap::{Args, Subcommand};

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Line to add, as "Name:Size[:Quantity]" (e.g. "Pepperoni:Large:2").
    #[arg(short, long = "item", value_name = "SPEC", required = true)]
    pub items: Vec<String>,

    /// Payment method (falls back to checkout.default_method).
    #[arg(short, long)]
    pub payment: Option<String>,

    /// Build the cart and show it without placing the order.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a new config file.
    Init {
        /// Output file path.
        #[arg(short, long, default_value = "pizza.toml")]
        output: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
