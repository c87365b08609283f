//! Storefront Core - persistence and checkout logic for the watch store
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core entities (Product, CartLine, Order, Credential, ...)
//! - **ports**: Trait definitions for external dependencies (KeyValueStore, PaymentGateway)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (DuckDB, in-memory, simulated gateway)

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;
pub mod migrations;
pub mod log_migrations;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::duckdb::DuckDbStore;
use adapters::simulated::SimulatedGateway;
use config::Config;
use ports::{KeyValueStore, PaymentGateway};
use services::*;

// Re-export commonly used types at crate root
pub use domain::{
    CartLine, CartSummary, Credential, LineDetail, Order, PaymentDetails, Product, Session,
};
pub use domain::money::format_inr;
pub use domain::result::{Error, OperationResult};
pub use services::{EntryPoint, LogEvent, LoggingService};

/// File name of the store database inside the store directory
pub const STORE_FILE: &str = "storefront.duckdb";

/// Main context for storefront operations
///
/// Holds the configuration, the backing store and every service. All
/// services share one `JsonStore`, so they see each other's writes
/// immediately.
pub struct StorefrontContext {
    pub config: Config,
    pub store: JsonStore,
    pub session_service: SessionService,
    pub auth_service: AuthService,
    pub catalog_service: CatalogService,
    pub cart_service: CartService,
    pub order_service: OrderService,
    pub checkout_service: CheckoutService,
}

impl StorefrontContext {
    /// Open the store in `store_dir`, creating it on first use
    pub fn new(store_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(store_dir)
            .with_context(|| format!("Failed to create {}", store_dir.display()))?;
        Config::write_defaults_if_missing(store_dir)?;
        let config = Config::load(store_dir)?;

        let backend = DuckDbStore::new(&store_dir.join(STORE_FILE))?;
        backend.ensure_schema()?;

        Self::with_store(config, Arc::new(backend))
    }

    /// Build a context over any backend, using the simulated gateway
    pub fn with_store(config: Config, backend: Arc<dyn KeyValueStore>) -> Result<Self> {
        let gateway = Arc::new(SimulatedGateway::new(config.checkout_delay));
        Self::with_gateway(config, backend, gateway)
    }

    /// Build a context over any backend and payment gateway
    ///
    /// Checks the store schema version and seeds the catalog when the
    /// config asks for it.
    pub fn with_gateway(
        config: Config,
        backend: Arc<dyn KeyValueStore>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Result<Self> {
        let store = JsonStore::new(backend, config.key_prefix.clone());
        store
            .ensure_schema_version()
            .context("Store cannot be opened by this version")?;

        let session_service = SessionService::new(store.clone());
        let auth_service = AuthService::new(store.clone());
        let catalog_service = CatalogService::new(store.clone());
        let cart_service = CartService::new(store.clone(), catalog_service.clone());
        let order_service = OrderService::new(store.clone());
        let checkout_service =
            CheckoutService::new(cart_service.clone(), order_service.clone(), gateway);

        if config.seed_catalog {
            catalog_service.seed_if_empty()?;
        }

        Ok(Self {
            config,
            store,
            session_service,
            auth_service,
            catalog_service,
            cart_service,
            order_service,
            checkout_service,
        })
    }
}
