//! Order service - order history and the post-checkout confirmation

use crate::domain::result::Result;
use crate::domain::{LineDetail, Order};
use crate::services::storage::{keys, JsonStore};

#[derive(Clone)]
pub struct OrderService {
    store: JsonStore,
}

impl OrderService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Record a purchase and empty the cart
    ///
    /// Three separate writes: the order history, the cart removal and the
    /// confirmation id. A failure part way leaves the earlier writes in place.
    pub fn place_order(&self, email: &str, lines: Vec<LineDetail>, grand_total: i64) -> Result<Order> {
        let order = Order::new(lines, grand_total);

        let mut orders = self.list_orders(email);
        orders.insert(0, order.clone());
        self.store.set(&keys::orders(email), &orders)?;

        self.store.remove(&keys::cart(email))?;
        self.store.set(&keys::last_order(email), &order.order_id)?;

        Ok(order)
    }

    /// Order history, newest first
    pub fn list_orders(&self, email: &str) -> Vec<Order> {
        self.store.get(&keys::orders(email), Vec::new())
    }

    /// Id of the most recent checkout that has not been acknowledged
    pub fn last_order_id(&self, email: &str) -> Option<String> {
        self.store.get(&keys::last_order(email), None)
    }

    /// Read and clear the confirmation id
    pub fn take_last_order(&self, email: &str) -> Result<Option<String>> {
        let id = self.last_order_id(email);
        if id.is_some() {
            self.store.remove(&keys::last_order(email))?;
        }
        Ok(id)
    }
}
