//! Orders command - purchase history

use anyhow::Result;
use colored::Colorize;

use super::{get_context, require_login};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let email = require_login(&ctx)?;
    let orders = ctx.order_service.list_orders(&email);

    if json {
        println!("{}", serde_json::to_string_pretty(&orders)?);
        return Ok(());
    }

    if orders.is_empty() {
        output::info("No orders yet.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Order ID", "Placed", "Items", "Total"]);
    for order in &orders {
        let items = order
            .line_items
            .iter()
            .map(|l| format!("{} x{}", l.title, l.quantity))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            order.order_id.clone(),
            order
                .created_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            items,
            output::money(order.total),
        ]);
    }
    println!("{}", table);

    let spent: i64 = orders.iter().map(|o| o.total).sum();
    println!("{} {}", "Lifetime total:".bold(), output::money(spent));
    Ok(())
}
