//! Simulated payment gateway
//!
//! Approves every charge after a fixed delay. Stands in for the network
//! round trip of a real processor; no money moves.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::result::{Error, Result};
use crate::ports::{ChargeReceipt, ChargeRequest, PaymentGateway};

/// Default processing delay, matching the web storefront
pub const DEFAULT_DELAY: Duration = Duration::from_millis(350);

/// Gateway that sleeps, then approves
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt> {
        if request.amount <= 0 {
            return Err(Error::validation("Nothing to charge."));
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(ChargeReceipt {
            amount: request.amount,
            card_last4: request.card_last4.clone(),
        })
    }
}
