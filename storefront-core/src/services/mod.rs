//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! owns one area of the storefront and reads and writes through a shared
//! `JsonStore`.

mod auth;
mod cart;
mod catalog;
mod checkout;
pub mod logging;
pub mod migration;
mod orders;
mod session;
pub mod storage;

pub use auth::AuthService;
pub use cart::CartService;
pub use catalog::CatalogService;
pub use checkout::CheckoutService;
pub use logging::{EntryPoint, LogEntry, LogEvent, LogStats, LoggingService};
pub use migration::{MigrationResult, MigrationService};
pub use orders::OrderService;
pub use session::{SessionService, LOGIN_REQUIRED};
pub use storage::{keys, JsonStore, DEFAULT_KEY_PREFIX, SCHEMA_VERSION};
