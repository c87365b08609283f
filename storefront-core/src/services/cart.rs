//! Cart service - per-shopper cart lines

use crate::domain::result::{Error, Result};
use crate::domain::{clamp_quantity, CartLine, CartSummary, LineDetail};
use crate::services::catalog::CatalogService;
use crate::services::storage::{keys, JsonStore};

fn normalize(mut line: CartLine) -> CartLine {
    line.quantity = clamp_quantity(i64::from(line.quantity));
    line
}

/// Cart operations, keyed by normalized email
///
/// Every mutation is a read-modify-write of the whole `cart:<email>` list.
#[derive(Clone)]
pub struct CartService {
    store: JsonStore,
    catalog: CatalogService,
}

impl CartService {
    pub fn new(store: JsonStore, catalog: CatalogService) -> Self {
        Self { store, catalog }
    }

    /// Stored lines in insertion order; empty when absent or unreadable
    ///
    /// Quantities written by older clients are clamped into [1, 99].
    pub fn get_cart(&self, email: &str) -> Vec<CartLine> {
        self.store
            .get::<Vec<CartLine>>(&keys::cart(email), Vec::new())
            .into_iter()
            .map(normalize)
            .collect()
    }

    /// Overwrite the stored lines, clamping every quantity into [1, 99]
    pub fn set_cart(&self, email: &str, lines: &[CartLine]) -> Result<()> {
        let lines: Vec<CartLine> = lines.iter().cloned().map(normalize).collect();
        self.store.set(&keys::cart(email), &lines)
    }

    /// Add one unit of a product, appending a new line if needed
    pub fn add_or_increment(&self, email: &str, product_id: &str) -> Result<Vec<CartLine>> {
        if self.catalog.get(product_id).is_none() {
            return Err(Error::not_found(format!("Product not found: {}", product_id)));
        }

        let mut lines = self.get_cart(email);
        match lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.adjust(1),
            None => lines.push(CartLine::new(product_id, 1)),
        }
        self.set_cart(email, &lines)?;
        Ok(lines)
    }

    /// Change a line's quantity by `delta`, clamped to [1, 99]
    ///
    /// A product that is not in the cart is left alone.
    pub fn update_quantity(&self, email: &str, product_id: &str, delta: i64) -> Result<Vec<CartLine>> {
        let mut lines = self.get_cart(email);
        let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) else {
            return Ok(lines);
        };
        line.adjust(delta);
        self.set_cart(email, &lines)?;
        Ok(lines)
    }

    /// Drop a line entirely
    pub fn remove(&self, email: &str, product_id: &str) -> Result<Vec<CartLine>> {
        let mut lines = self.get_cart(email);
        lines.retain(|l| l.product_id != product_id);
        self.set_cart(email, &lines)?;
        Ok(lines)
    }

    /// Sum of quantities, for the cart badge
    pub fn total_count(&self, email: &str) -> u32 {
        self.get_cart(email).iter().map(|l| l.quantity).sum()
    }

    /// Price the cart against the current catalog
    ///
    /// Lines whose product has left the catalog are skipped.
    pub fn detailed_lines(&self, email: &str) -> CartSummary {
        let products = self.catalog.list();
        let lines = self
            .get_cart(email)
            .iter()
            .filter_map(|line| {
                products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .map(|p| LineDetail::from_product(p, line.quantity))
            })
            .collect();
        CartSummary::new(lines)
    }

    pub fn clear(&self, email: &str) -> Result<()> {
        self.store.remove(&keys::cart(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::domain::MAX_QUANTITY;
    use crate::ports::KeyValueStore;
    use std::sync::Arc;

    const EMAIL: &str = "a@b.com";

    fn service() -> (Arc<MemoryStore>, CartService) {
        let backend = Arc::new(MemoryStore::new());
        let store = JsonStore::new(backend.clone(), "ws_");
        let catalog = CatalogService::new(store.clone());
        catalog.seed_if_empty().unwrap();
        (backend, CartService::new(store, catalog))
    }

    #[test]
    fn test_add_then_increment() {
        let (_, cart) = service();
        cart.add_or_increment(EMAIL, "neo-chrono").unwrap();
        cart.add_or_increment(EMAIL, "titan-arc").unwrap();
        let lines = cart.add_or_increment(EMAIL, "neo-chrono").unwrap();

        assert_eq!(
            lines,
            vec![CartLine::new("neo-chrono", 2), CartLine::new("titan-arc", 1)]
        );
        assert_eq!(cart.total_count(EMAIL), 3);
    }

    #[test]
    fn test_unknown_product_rejected() {
        let (_, cart) = service();
        let err = cart.add_or_increment(EMAIL, "sundial").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(cart.get_cart(EMAIL).is_empty());
    }

    #[test]
    fn test_quantity_clamps_at_both_ends() {
        let (_, cart) = service();
        for _ in 0..100 {
            cart.add_or_increment(EMAIL, "neo-chrono").unwrap();
        }
        assert_eq!(cart.get_cart(EMAIL)[0].quantity, MAX_QUANTITY);

        cart.update_quantity(EMAIL, "neo-chrono", -500).unwrap();
        assert_eq!(cart.get_cart(EMAIL)[0].quantity, 1);

        cart.update_quantity(EMAIL, "neo-chrono", -1).unwrap();
        assert_eq!(cart.get_cart(EMAIL)[0].quantity, 1);
    }

    #[test]
    fn test_set_cart_clamps_quantities() {
        let (backend, cart) = service();
        let lines = vec![
            CartLine {
                product_id: "neo-chrono".into(),
                quantity: 0,
            },
            CartLine {
                product_id: "titan-arc".into(),
                quantity: 500,
            },
        ];
        cart.set_cart(EMAIL, &lines).unwrap();

        let quantities: Vec<u32> = cart.get_cart(EMAIL).iter().map(|l| l.quantity).collect();
        assert_eq!(quantities, vec![1, MAX_QUANTITY]);
        assert_eq!(cart.total_count(EMAIL), 1 + MAX_QUANTITY);

        let raw = backend.get_raw("ws_cart:a@b.com").unwrap().unwrap();
        assert!(raw.contains("\"quantity\":99"));
        assert!(!raw.contains("500"));
    }

    #[test]
    fn test_legacy_out_of_range_quantities_are_clamped_on_read() {
        let (backend, cart) = service();
        backend
            .set_raw("ws_cart:a@b.com", r#"[{"id":"neo-chrono","qty":0}]"#)
            .unwrap();
        assert_eq!(cart.get_cart(EMAIL), vec![CartLine::new("neo-chrono", 1)]);
        assert_eq!(cart.total_count(EMAIL), 1);
    }

    #[test]
    fn test_update_missing_line_is_noop() {
        let (_, cart) = service();
        let lines = cart.update_quantity(EMAIL, "neo-chrono", 1).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let (_, cart) = service();
        cart.add_or_increment(EMAIL, "neo-chrono").unwrap();
        cart.add_or_increment(EMAIL, "pixel-pro").unwrap();

        let lines = cart.remove(EMAIL, "neo-chrono").unwrap();
        assert_eq!(lines, vec![CartLine::new("pixel-pro", 1)]);

        cart.clear(EMAIL).unwrap();
        assert!(cart.get_cart(EMAIL).is_empty());
    }

    #[test]
    fn test_detailed_lines_totals() {
        let (_, cart) = service();
        cart.set_cart(EMAIL, &[CartLine::new("neo-chrono", 2), CartLine::new("pixel-pro", 1)])
            .unwrap();

        let summary = cart.detailed_lines(EMAIL);
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].line_total, 15998);
        assert_eq!(summary.grand_total, 15998 + 6999);
        assert_eq!(summary.item_count(), 3);
    }

    #[test]
    fn test_detailed_lines_skips_missing_products_and_clamps() {
        let (backend, cart) = service();
        backend
            .set_raw(
                "ws_cart:a@b.com",
                r#"[{"id":"gone-watch","qty":1},{"id":"titan-arc","qty":250}]"#,
            )
            .unwrap();

        let summary = cart.detailed_lines(EMAIL);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].quantity, MAX_QUANTITY);
        assert_eq!(summary.grand_total, 11999 * i64::from(MAX_QUANTITY));
    }

    #[test]
    fn test_cart_key_ignores_email_case() {
        let (_, cart) = service();
        cart.add_or_increment(" A@B.com", "neo-chrono").unwrap();
        assert_eq!(cart.get_cart(EMAIL), vec![CartLine::new("neo-chrono", 1)]);
    }

    #[test]
    fn test_carts_are_per_user() {
        let (_, cart) = service();
        cart.add_or_increment(EMAIL, "neo-chrono").unwrap();
        assert!(cart.get_cart("other@b.com").is_empty());
    }
}
