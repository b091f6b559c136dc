//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { output, force } => init_config(&output, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        return ctx.output.json(&ctx.config);
    }

    ctx.output.header("Current Configuration");
    let source = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in defaults)".to_string());
    ctx.output.kv("source", &source);

    ctx.output.line("");
    ctx.output.line("[shop]");
    ctx.output.kv("name", &ctx.config.shop.name);
    ctx.output.kv("currency_symbol", &ctx.config.shop.currency_symbol);

    let checkout = &ctx.config.checkout;
    ctx.output.line("");
    ctx.output.line("[checkout]");
    ctx.output.kv(
        "require_payment_method",
        &checkout.require_payment_method.to_string(),
    );
    let accepted = if checkout.accepted_methods.is_empty() {
        "(any)".to_string()
    } else {
        checkout.accepted_methods.join(", ")
    };
    ctx.output.kv("accepted_methods", &accepted);
    if let Some(ref method) = checkout.default_method {
        ctx.output.kv("default_method", method);
    }

    ctx.output.line("");
    if ctx.config.menu.is_empty() {
        ctx.output.line("[menu] built-in");
    } else {
        ctx.output.line("[[menu]]");
        for item in &ctx.config.menu {
            ctx.output.list_item(&item.name);
        }
    }

    Ok(())
}

fn init_config(output: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(output);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = ctx.config.catalog() {
        errors.push(format!("menu: {}", e));
    }

    let checkout = &ctx.config.checkout;
    if checkout
        .accepted_methods
        .iter()
        .any(|m| m.trim().is_empty())
    {
        errors.push("checkout.accepted_methods must not contain blank names".to_string());
    }

    if let Some(ref method) = checkout.default_method {
        if let Err(e) = ctx.config.policy().validate(method) {
            errors.push(format!("checkout.default_method: {}", e));
        }
    }

    if !checkout.require_payment_method && !checkout.accepted_methods.is_empty() {
        warnings.push(
            "orders without a payment method skip checkout.accepted_methods"
                .to_string(),
        );
    }

    if ctx.config_path.is_none() {
        warnings.push("No config file found, using built-in defaults".to_string());
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
