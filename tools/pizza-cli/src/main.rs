//! Pizza CLI - order pizzas from the terminal.
//!
//! Commands:
//! - `pizza menu` - List the menu and prices
//! - `pizza order` - Build a cart from `--item` specs and check out
//! - `pizza shell` - Interactive ordering session
//! - `pizza config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{ConfigArgs, OrderArgs};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PIZZA_LOG";

/// Pizza CLI - browse the menu, fill a cart and place orders
#[derive(Parser)]
#[command(name = "pizza")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the menu
    Menu,

    /// Place an order in one go
    Order(OrderArgs),

    /// Start an interactive ordering session
    Shell,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Initialize tracing from `PIZZA_LOG`, writing to stderr.
///
/// Defaults to "warn", or "debug" with `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Menu => commands::menu::run(&ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
        Commands::Shell => commands::shell::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
