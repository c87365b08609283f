//! Catalog service - the product list

use crate::adapters::demo::generate_demo_products;
use crate::domain::result::Result;
use crate::domain::Product;
use crate::services::storage::{keys, JsonStore};

/// Read access to the seeded product list
#[derive(Clone)]
pub struct CatalogService {
    store: JsonStore,
}

impl CatalogService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Write the built-in catalog when none is stored
    ///
    /// Returns true when it wrote. An unreadable product list counts as
    /// missing and is replaced.
    pub fn seed_if_empty(&self) -> Result<bool> {
        if !self.list().is_empty() {
            return Ok(false);
        }
        self.store.set(keys::PRODUCTS, &generate_demo_products())?;
        Ok(true)
    }

    /// All products in catalog order
    pub fn list(&self) -> Vec<Product> {
        self.store.get(keys::PRODUCTS, Vec::new())
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.list().into_iter().find(|p| p.id == id)
    }

    /// Case-insensitive title match; an empty query returns everything
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.trim().to_lowercase();
        let products = self.list();
        if needle.is_empty() {
            return products;
        }
        products
            .into_iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .collect()
    }
}
