//! Product commands - browse the catalog

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use storefront_core::domain::product::decode_image;
use storefront_core::Error;

use super::{get_context, require_login};
use crate::output;

pub fn list(search: Option<&str>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    require_login(&ctx)?;
    let products = ctx.catalog_service.search(search.unwrap_or(""));

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        output::warning("No watches match that search.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Watch", "Genre", "Rating", "Price"]);
    for p in &products {
        table.add_row(vec![
            p.id.clone(),
            p.title.clone(),
            p.genre.clone(),
            output::stars(p.rating),
            output::money(p.price),
        ]);
    }
    println!("{}", table);
    println!("{}", format!("{} watch(es). Add one with 'ws cart add <id>'.", products.len()).dimmed());
    Ok(())
}

pub fn show(id: &str, image: Option<&Path>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    require_login(&ctx)?;
    let product = ctx
        .catalog_service
        .get(id)
        .ok_or_else(|| Error::not_found(format!("Product not found: {}", id)))?;

    if let Some(path) = image {
        let bytes = decode_image(&product.image)
            .ok_or_else(|| anyhow!("Product {} has no embedded image", id))?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !json {
            output::success(&format!("Saved image to {}", path.display()));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
        return Ok(());
    }

    println!("{}", product.title.bold());
    println!("  {} | {}", product.genre.cyan(), output::stars(product.rating));
    println!("  {}", output::money(product.price).green().bold());
    println!();
    println!("  {}", product.description);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::services::LOGIN_REQUIRED;

    // Only test in this binary that touches STOREFRONT_DIR
    #[test]
    fn test_catalog_commands_require_login() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("STOREFRONT_DIR", dir.path());

        let err = list(None, true).unwrap_err();
        assert_eq!(err.to_string(), LOGIN_REQUIRED);

        let err = show("neo-chrono", None, true).unwrap_err();
        assert_eq!(err.to_string(), LOGIN_REQUIRED);
    }
}
