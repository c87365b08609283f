//! Payment gateway port
//!
//! Checkout hands the validated charge to a gateway and waits for it before
//! writing the order. No real processor exists; the simulated adapter only
//! models the network round trip.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

/// What checkout asks the gateway to charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    pub amount: i64,
    pub card_last4: String,
}

/// Gateway acknowledgement of a charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeReceipt {
    pub amount: i64,
    pub card_last4: String,
}

/// Payment gateway abstraction
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Gateway name for logs (e.g. "simulated")
    fn name(&self) -> &str;

    /// Charge the card; this is checkout's only suspension point
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt>;
}
