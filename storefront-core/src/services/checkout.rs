//! Checkout service - validate, charge, place the order

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::domain::result::{Error, Result};
use crate::domain::{Order, PaymentDetails};
use crate::ports::{ChargeRequest, PaymentGateway};
use crate::services::cart::CartService;
use crate::services::orders::OrderService;

/// Turns a cart into an order
///
/// Only one checkout may be in flight per service; a second submission
/// while the gateway is still working is refused.
pub struct CheckoutService {
    cart: CartService,
    orders: OrderService,
    gateway: Arc<dyn PaymentGateway>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when checkout finishes, however it finishes
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| Error::conflict("Payment is already processing."))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CheckoutService {
    pub fn new(cart: CartService, orders: OrderService, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            cart,
            orders,
            gateway,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn gateway_name(&self) -> &str {
        self.gateway.name()
    }

    pub fn is_processing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Check out the shopper's cart, validating against local time
    pub async fn checkout(&self, email: &str, details: &PaymentDetails) -> Result<Order> {
        self.checkout_at(email, details, Local::now().naive_local()).await
    }

    /// Check out with an explicit "now" for expiry checks
    pub async fn checkout_at(
        &self,
        email: &str,
        details: &PaymentDetails,
        now: NaiveDateTime,
    ) -> Result<Order> {
        let _guard = InFlight::acquire(&self.in_flight)?;

        let summary = self.cart.detailed_lines(email);
        if summary.is_empty() {
            return Err(Error::validation("Your cart is empty."));
        }

        details.validate(now)?;

        self.gateway
            .charge(&ChargeRequest {
                amount: summary.grand_total,
                card_last4: details.card_last4(),
            })
            .await?;

        self.orders
            .place_order(email, summary.lines, summary.grand_total)
    }
}
