//! Cart commands - view and edit the signed-in shopper's cart

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use storefront_core::StorefrontContext;

use super::{get_context, require_login};
use crate::output;

#[derive(Subcommand)]
pub enum CartCommands {
    /// Show cart lines and total
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add one unit of a product
    Add {
        /// Product ID (see 'ws products')
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Increase a line's quantity by one
    Inc {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decrease a line's quantity by one (stops at 1)
    Dec {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a line
    Remove {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CartCommands {
    /// Command name for the event log
    pub fn name(&self) -> &'static str {
        match self {
            CartCommands::Show { .. } => "cart show",
            CartCommands::Add { .. } => "cart add",
            CartCommands::Inc { .. } => "cart inc",
            CartCommands::Dec { .. } => "cart dec",
            CartCommands::Remove { .. } => "cart remove",
        }
    }

    pub fn json(&self) -> bool {
        match self {
            CartCommands::Show { json }
            | CartCommands::Add { json, .. }
            | CartCommands::Inc { json, .. }
            | CartCommands::Dec { json, .. }
            | CartCommands::Remove { json, .. } => *json,
        }
    }
}

pub fn run(command: CartCommands) -> Result<()> {
    let ctx = get_context()?;
    let email = require_login(&ctx)?;

    let json = match command {
        CartCommands::Show { json } => json,
        CartCommands::Add { id, json } => {
            ctx.cart_service.add_or_increment(&email, &id)?;
            if !json {
                output::success(&format!("Added {} to your cart.", id));
            }
            json
        }
        CartCommands::Inc { id, json } => {
            ctx.cart_service.update_quantity(&email, &id, 1)?;
            json
        }
        CartCommands::Dec { id, json } => {
            ctx.cart_service.update_quantity(&email, &id, -1)?;
            json
        }
        CartCommands::Remove { id, json } => {
            ctx.cart_service.remove(&email, &id)?;
            if !json {
                output::success(&format!("Removed {} from your cart.", id));
            }
            json
        }
    };

    print_cart(&ctx, &email, json)
}

fn print_cart(ctx: &StorefrontContext, email: &str, json: bool) -> Result<()> {
    let summary = ctx.cart_service.detailed_lines(email);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.is_empty() {
        output::info("Your cart is empty. Browse with 'ws products'.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Watch", "Price", "Qty", "Total"]);
    for line in &summary.lines {
        table.add_row(vec![
            line.product_id.clone(),
            line.title.clone(),
            output::money(line.unit_price),
            line.quantity.to_string(),
            output::money(line.line_total),
        ]);
    }
    println!("{}", table);
    println!(
        "{} {}  ({} item(s))",
        "Total:".bold(),
        output::money(summary.grand_total).green().bold(),
        summary.item_count()
    );
    Ok(())
}
