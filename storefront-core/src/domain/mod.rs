//! Core domain entities
//!
//! All storefront records are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod cart;
pub mod credential;
pub mod money;
mod order;
pub mod payment;
pub mod product;
pub mod result;
mod session;

pub use cart::{clamp_quantity, CartLine, CartSummary, LineDetail, MAX_QUANTITY, MIN_QUANTITY};
pub use credential::{normalize_email, Credential};
pub use order::Order;
pub use payment::{luhn_check, parse_expiry, Expiry, PaymentDetails};
pub use product::{Product, WatchPalette};
pub use session::Session;
