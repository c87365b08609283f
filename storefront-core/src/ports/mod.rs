//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The services
//! depend only on these traits, not on concrete implementations.

mod kv_store;
mod payment_gateway;

pub use kv_store::KeyValueStore;
pub use payment_gateway::{ChargeReceipt, ChargeRequest, PaymentGateway};
