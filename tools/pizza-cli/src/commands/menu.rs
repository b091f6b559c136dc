//! Show the menu.

use anyhow::{Context as _, Result};

use crate::context::Context;

/// Run the menu command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.config.catalog().context("Menu in config file is invalid")?;

    if ctx.output.is_json() {
        return ctx.output.json(catalog.all());
    }

    ctx.output.header(&format!("{} - Choose a Pizza", ctx.config.shop.name));

    let name_width = catalog
        .all()
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    let widths = [name_width, 8, 8, 8];

    ctx.output.table_row(&["Name", "Small", "Medium", "Large"], &widths);
    for entry in catalog.all() {
        let [small, medium, large] = ctx.output.menu_prices(entry);
        ctx.output.table_row(
            &[
                entry.name.as_str(),
                small.as_str(),
                medium.as_str(),
                large.as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}
