//! Checkout command - pay for the cart

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_core::{Error, PaymentDetails};

use super::{ensure_interactive, get_context, require_login};
use crate::output;

/// Payment fields as given on the command line
pub struct CheckoutArgs {
    pub name: Option<String>,
    pub card: Option<String>,
    pub expiry: Option<String>,
    pub cvv: Option<String>,
    pub zip: Option<String>,
}

fn field_or_prompt(value: Option<String>, flag: &str, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => {
            ensure_interactive(flag)?;
            Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
        }
    }
}

impl CheckoutArgs {
    /// Fill missing fields interactively; CVV is read without echo
    fn into_details(self) -> Result<PaymentDetails> {
        let cardholder = field_or_prompt(self.name, "name", "Name on card")?;
        let card_number = field_or_prompt(self.card, "card", "Card number")?;
        let expiry = field_or_prompt(self.expiry, "expiry", "Expiry (MM/YY)")?;
        let cvv = match self.cvv {
            Some(v) => v,
            None => {
                ensure_interactive("cvv")?;
                Password::new().with_prompt("CVV").interact()?
            }
        };
        let zip = field_or_prompt(self.zip, "zip", "ZIP/Postal code")?;
        Ok(PaymentDetails {
            cardholder,
            card_number,
            expiry,
            cvv,
            zip,
        })
    }
}

fn spinner(json: bool, gateway: &str) -> ProgressBar {
    if json {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Processing payment ({})...", gateway));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn run(args: CheckoutArgs, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let email = require_login(&ctx)?;

    let summary = ctx.cart_service.detailed_lines(&email);
    if summary.is_empty() {
        return Err(Error::validation("Your cart is empty.").into());
    }
    if !json {
        println!(
            "{} {} for {} item(s)",
            "Paying".bold(),
            output::money(summary.grand_total).green().bold(),
            summary.item_count()
        );
    }

    let details = args.into_details()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let pb = spinner(json, ctx.checkout_service.gateway_name());
    let result = runtime.block_on(ctx.checkout_service.checkout(&email, &details));
    pb.finish_and_clear();
    let order = result?;

    // The confirmation is shown here, so it is consumed right away
    ctx.order_service.take_last_order(&email)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&order)?);
        return Ok(());
    }

    output::success("Payment successful. Order placed!");
    println!("  Order ID: {}", order.order_id.bold());
    println!("  Total:    {}", output::money(order.total));
    println!("  Card:     •••• {}", details.card_last4());
    Ok(())
}
