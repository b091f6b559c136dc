//! Interactive ordering session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use pizza_commerce::catalog::Size;
use pizza_commerce::{LineItemId, Session};

use crate::context::Context;

const QUANTITY_CHOICES: usize = 10;

enum Action {
    Choose,
    ViewCart,
    Edit,
    Delete,
    OrderNow,
    History,
    Quit,
}

const ACTIONS: [(&str, Action); 7] = [
    ("Choose a pizza", Action::Choose),
    ("View cart", Action::ViewCart),
    ("Edit a cart line", Action::Edit),
    ("Delete a cart line", Action::Delete),
    ("Order now", Action::OrderNow),
    ("Order history", Action::History),
    ("Quit", Action::Quit),
];

/// Run the shell command.
pub fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The interactive shell does not support --json");
    }

    let mut session = ctx.session()?;
    ctx.output.header(&format!("Welcome to {}", ctx.config.shop.name));

    loop {
        let labels: Vec<String> = ACTIONS
            .iter()
            .map(|(label, action)| match action {
                Action::ViewCart => format!("{} ({})", label, session.cart().len()),
                _ => label.to_string(),
            })
            .collect();

        let Some(choice) = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        match ACTIONS[choice].1 {
            Action::Choose => choose_pizza(&mut session, ctx)?,
            Action::ViewCart => {
                ctx.output.header("Your cart");
                ctx.output.cart(session.cart().items(), session.cart().total()?);
            }
            Action::Edit => {
                if let Some(id) = pick_line(&session, "Edit which line?", ctx)? {
                    session.edit(&id)?;
                    fill_draft(&mut session, ctx)?;
                }
            }
            Action::Delete => {
                if let Some(id) = pick_line(&session, "Delete which line?", ctx)? {
                    session.remove(&id);
                    ctx.output.success("Removed from cart");
                }
            }
            Action::OrderNow => order_now(&mut session, ctx)?,
            Action::History => show_history(&session, ctx),
            Action::Quit => break,
        }
    }

    Ok(())
}

fn choose_pizza(session: &mut Session, ctx: &Context) -> Result<()> {
    let entries: Vec<String> = session
        .catalog()
        .all()
        .iter()
        .map(|e| {
            let prices: Vec<String> = Size::ALL
                .iter()
                .zip(ctx.output.menu_prices(e))
                .map(|(size, price)| format!("{}: {}", size, price))
                .collect();
            format!("{}  ({})", e.name, prices.join("  "))
        })
        .collect();

    let Some(index) = Select::new()
        .with_prompt("Choose a Pizza")
        .items(&entries)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    let name = session.catalog().all()[index].name.clone();
    session.select(&name)?;
    fill_draft(session, ctx)
}

/// Prompt for size and quantity until the draft commits or is abandoned.
fn fill_draft(session: &mut Session, ctx: &Context) -> Result<()> {
    let verb = if session.draft().is_editing() {
        "Update Order"
    } else {
        "Add to Orders"
    };

    loop {
        let item = session.draft().selected_item().unwrap_or_default().to_string();
        ctx.output.line(&format!("Pizza: {}", item));

        let sizes: Vec<&str> = Size::ALL.iter().map(|s| s.as_str()).collect();
        let current = session
            .draft()
            .size()
            .and_then(|s| Size::ALL.iter().position(|x| *x == s))
            .unwrap_or(0);
        let Some(size_index) = Select::new()
            .with_prompt("Size")
            .items(&sizes)
            .default(current)
            .interact_opt()?
        else {
            session.cancel();
            ctx.output.info("Cancelled");
            return Ok(());
        };
        session.set_size(Size::ALL[size_index]);

        let Some(quantity) = prompt_quantity(session.draft().quantity_text())? else {
            session.cancel();
            ctx.output.info("Cancelled");
            return Ok(());
        };
        session.set_quantity(quantity);

        match session.commit() {
            Ok(id) => {
                if let Some(line) = session.cart().get(&id) {
                    ctx.output
                        .success(&format!("{}: {}", verb, ctx.output.describe_line(line)));
                }
                return Ok(());
            }
            Err(e) => {
                ctx.output.error(&e.to_string());
                let retry = Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    session.cancel();
                    return Ok(());
                }
            }
        }
    }
}

/// Quantity picker: 1 to 10, or free text.
fn prompt_quantity(current: &str) -> Result<Option<String>> {
    let mut choices: Vec<String> = (1..=QUANTITY_CHOICES).map(|q| q.to_string()).collect();
    choices.push("Other...".to_string());

    let default = choices
        .iter()
        .position(|c| c == current.trim())
        .unwrap_or(0);

    let Some(index) = Select::new()
        .with_prompt("Quantity")
        .items(&choices)
        .default(default)
        .interact_opt()?
    else {
        return Ok(None);
    };

    if index < QUANTITY_CHOICES {
        return Ok(Some(choices[index].clone()));
    }

    let typed: String = Input::new()
        .with_prompt("Quantity")
        .allow_empty(true)
        .interact_text()?;
    Ok(Some(typed))
}

fn pick_line(session: &Session, prompt: &str, ctx: &Context) -> Result<Option<LineItemId>> {
    let items = session.cart().items();
    if items.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(None);
    }

    let labels: Vec<String> = items.iter().map(|i| ctx.output.describe_line(i)).collect();
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|index| items[index].id().clone()))
}

fn order_now(session: &mut Session, ctx: &Context) -> Result<()> {
    if session.cart().is_empty() {
        ctx.output
            .error("No items in your cart. Please add pizzas to your cart.");
        return Ok(());
    }

    ctx.output.header("Your cart");
    ctx.output.cart(session.cart().items(), session.cart().total()?);

    let methods = session.policy().accepted_methods.clone();
    let method = if methods.is_empty() {
        Input::<String>::new()
            .with_prompt("Payment Method")
            .allow_empty(!session.policy().require_payment_method)
            .interact_text()?
    } else {
        let default = ctx
            .config
            .checkout
            .default_method
            .as_ref()
            .and_then(|d| methods.iter().position(|m| m == d))
            .unwrap_or(0);
        let Some(index) = Select::new()
            .with_prompt("Payment Method")
            .items(&methods)
            .default(default)
            .interact_opt()?
        else {
            return Ok(());
        };
        methods[index].clone()
    };

    match session.checkout(&method) {
        Ok(order) => {
            ctx.output.header("Order Placed!");
            ctx.output.order(&order);
            ctx.output.success(&format!(
                "Your order has been placed using {}. Thank you for ordering from {}.",
                order.payment_method(),
                ctx.config.shop.name
            ));
        }
        Err(e) => ctx.output.error(&e.to_string()),
    }

    Ok(())
}

fn show_history(session: &Session, ctx: &Context) {
    ctx.output.header("Order history");

    let orders = session.history().all();
    if orders.is_empty() {
        ctx.output.info("No past orders yet");
        return;
    }

    for order in orders {
        ctx.output.line("");
        ctx.output.order(order);
    }
}
