//! Integration tests for storefront-core services
//!
//! These tests drive whole shopper flows through `StorefrontContext` over a
//! real DuckDB file. The payment gateway is the simulated one; all storage
//! operations are real.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use storefront_core::adapters::demo::generate_demo_products;
use storefront_core::adapters::duckdb::DuckDbStore;
use storefront_core::adapters::memory::MemoryStore;
use storefront_core::config::Config;
use storefront_core::domain::{luhn_check, parse_expiry, Expiry, MAX_QUANTITY};
use storefront_core::ports::KeyValueStore;
use storefront_core::services::{keys, SCHEMA_VERSION};
use storefront_core::{CartLine, Error, PaymentDetails, StorefrontContext, STORE_FILE};

// ============================================================================
// Test Helpers
// ============================================================================

/// Open a context on a fresh store directory
fn open_context(temp_dir: &TempDir) -> StorefrontContext {
    StorefrontContext::new(temp_dir.path()).expect("Failed to open store")
}

/// Context over a DuckDB file with no checkout delay
fn open_fast_context(temp_dir: &TempDir) -> StorefrontContext {
    let backend = DuckDbStore::new(&temp_dir.path().join(STORE_FILE)).unwrap();
    backend.ensure_schema().unwrap();
    let config = Config {
        checkout_delay: Duration::ZERO,
        ..Config::default()
    };
    StorefrontContext::with_store(config, Arc::new(backend)).unwrap()
}

fn card() -> PaymentDetails {
    PaymentDetails {
        cardholder: "Asha Rao".to_string(),
        card_number: "4111 1111 1111 1111".to_string(),
        expiry: "12/99".to_string(),
        cvv: "123".to_string(),
        zip: "560001".to_string(),
    }
}

/// Sign up and sign in, the way the front-ends do
fn sign_in(ctx: &StorefrontContext, email: &str) -> String {
    let email = ctx.auth_service.signup(email, "secret1").unwrap();
    ctx.session_service.set_session(&email).unwrap();
    email
}

// ============================================================================
// Store Bootstrap Tests
// ============================================================================

/// A new store is stamped with the schema version and seeded
#[test]
fn test_fresh_store_is_seeded() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = open_context(&temp_dir);

    assert!(temp_dir.path().join(STORE_FILE).exists());
    assert!(temp_dir.path().join("settings.json").exists());
    assert_eq!(ctx.config, Config::default());
    assert_eq!(ctx.catalog_service.list().len(), 12);
    assert_eq!(
        ctx.store.try_get::<u32>(keys::SCHEMA_VERSION).unwrap(),
        Some(SCHEMA_VERSION)
    );
}

/// Seeded products come back deep-equal and re-seeding changes nothing
#[test]
fn test_catalog_round_trip_and_reseed() {
    let temp_dir = TempDir::new().unwrap();
    {
        let ctx = open_context(&temp_dir);
        for product in generate_demo_products() {
            assert_eq!(ctx.catalog_service.get(&product.id), Some(product));
        }
    }

    let ctx = open_context(&temp_dir);
    assert!(!ctx.catalog_service.seed_if_empty().unwrap());
    assert_eq!(ctx.catalog_service.list(), generate_demo_products());
}

/// A store written by a newer schema is refused
#[test]
fn test_newer_store_is_refused() {
    let temp_dir = TempDir::new().unwrap();
    {
        let ctx = open_context(&temp_dir);
        ctx.store.set(keys::SCHEMA_VERSION, &(SCHEMA_VERSION + 1)).unwrap();
    }
    assert!(StorefrontContext::new(temp_dir.path()).is_err());
}

/// Seeding can be switched off
#[test]
fn test_unseeded_store() {
    let config = Config {
        seed_catalog: false,
        ..Config::default()
    };
    let ctx = StorefrontContext::with_store(config, Arc::new(MemoryStore::new())).unwrap();
    assert!(ctx.catalog_service.list().is_empty());
}

/// Two prefixes over one backend do not see each other's data
#[test]
fn test_key_prefix_isolates_profiles() {
    let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let first = StorefrontContext::with_store(Config::default(), Arc::clone(&backend)).unwrap();
    let second = StorefrontContext::with_store(
        Config {
            key_prefix: "qa_".to_string(),
            seed_catalog: false,
            ..Config::default()
        },
        Arc::clone(&backend),
    )
    .unwrap();

    first.auth_service.signup("a@b.com", "secret1").unwrap();
    assert!(!second.auth_service.exists("a@b.com"));
    assert!(second.catalog_service.list().is_empty());
    assert!(backend.get_raw("ws_users").unwrap().is_some());
}

// ============================================================================
// Account & Session Tests
// ============================================================================

#[test]
fn test_signup_login_flow() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = open_context(&temp_dir);

    assert_eq!(ctx.auth_service.signup("a@b.com", "secret1").unwrap(), "a@b.com");
    assert!(matches!(
        ctx.auth_service.signup("a@b.com", "secret1"),
        Err(Error::Conflict(_))
    ));
    assert!(matches!(
        ctx.auth_service.login("a@b.com", "nope-nope"),
        Err(Error::Auth(_))
    ));
    assert_eq!(ctx.auth_service.login(" A@B.com ", "secret1").unwrap(), "a@b.com");
}

/// Accounts and sessions survive reopening the store
#[test]
fn test_session_persists_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    {
        let ctx = open_context(&temp_dir);
        sign_in(&ctx, "Shopper@Example.com");
    }

    let ctx = open_context(&temp_dir);
    assert_eq!(
        ctx.session_service.require_email().unwrap(),
        "shopper@example.com"
    );

    ctx.session_service.clear_session().unwrap();
    assert!(matches!(ctx.session_service.require_email(), Err(Error::Auth(_))));
    assert_eq!(
        ctx.auth_service.login("shopper@example.com", "secret1").unwrap(),
        "shopper@example.com"
    );
}

// ============================================================================
// Cart Tests
// ============================================================================

#[test]
fn test_cart_clamps_at_99_and_1() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = open_context(&temp_dir);
    let email = sign_in(&ctx, "a@b.com");

    for _ in 0..MAX_QUANTITY {
        ctx.cart_service.add_or_increment(&email, "neo-chrono").unwrap();
    }
    ctx.cart_service.add_or_increment(&email, "neo-chrono").unwrap();
    assert_eq!(ctx.cart_service.total_count(&email), MAX_QUANTITY);

    ctx.cart_service.update_quantity(&email, "neo-chrono", -98).unwrap();
    ctx.cart_service.update_quantity(&email, "neo-chrono", -1).unwrap();
    assert_eq!(ctx.cart_service.get_cart(&email), vec![CartLine::new("neo-chrono", 1)]);
}

/// A cart written by the web storefront is read and priced
#[test]
fn test_legacy_cart_is_priced() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = open_context(&temp_dir);

    ctx.store
        .set(
            &keys::cart("a@b.com"),
            &serde_json::json!([{ "id": "orbit-prime", "qty": 2 }]),
        )
        .unwrap();

    let summary = ctx.cart_service.detailed_lines("a@b.com");
    assert_eq!(summary.grand_total, 2 * 13499);
    assert_eq!(summary.lines[0].title, "Orbit Prime O2");
}

// ============================================================================
// Checkout Tests
// ============================================================================

/// Two Neo Chronos check out at 15998 and empty the cart
#[tokio::test]
async fn test_checkout_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = open_fast_context(&temp_dir);
    let email = sign_in(&ctx, "a@b.com");

    ctx.cart_service
        .set_cart(&email, &[CartLine::new("neo-chrono", 2)])
        .unwrap();
    assert_eq!(ctx.cart_service.detailed_lines(&email).grand_total, 15998);

    let order = ctx.checkout_service.checkout(&email, &card()).await.unwrap();

    let orders = ctx.order_service.list_orders(&email);
    assert_eq!(orders[0].total, 15998);
    assert_eq!(orders[0].order_id, order.order_id);
    assert_eq!(orders[0].lines_total(), 15998);
    assert!(ctx.cart_service.get_cart(&email).is_empty());
    assert_eq!(
        ctx.order_service.take_last_order(&email).unwrap(),
        Some(order.order_id)
    );
}

/// The simulated gateway holds checkout for the configured delay
#[tokio::test(start_paused = true)]
async fn test_checkout_waits_for_gateway() {
    let ctx = StorefrontContext::with_store(Config::default(), Arc::new(MemoryStore::new())).unwrap();
    let email = sign_in(&ctx, "a@b.com");
    ctx.cart_service.add_or_increment(&email, "pixel-pro").unwrap();

    let started = tokio::time::Instant::now();
    ctx.checkout_service.checkout(&email, &card()).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(350));
}

#[tokio::test(start_paused = true)]
async fn test_double_submit_is_refused() {
    let ctx = StorefrontContext::with_store(Config::default(), Arc::new(MemoryStore::new())).unwrap();
    let email = sign_in(&ctx, "a@b.com");
    ctx.cart_service.add_or_increment(&email, "titan-arc").unwrap();
    let details = card();

    let (first, second) = tokio::join!(
        ctx.checkout_service.checkout(&email, &details),
        ctx.checkout_service.checkout(&email, &details),
    );

    assert!(first.is_ok());
    assert_eq!(
        second.unwrap_err().to_string(),
        "Payment is already processing."
    );
    assert_eq!(ctx.order_service.list_orders(&email).len(), 1);
}

/// Each invalid field is reported and nothing is written
#[tokio::test]
async fn test_checkout_validation_messages() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = open_fast_context(&temp_dir);
    let email = sign_in(&ctx, "a@b.com");
    ctx.cart_service.add_or_increment(&email, "drift-core").unwrap();

    let cases = [
        ("cardholder", " ", "Enter the name on the card."),
        ("card_number", "4111111111111112", "Enter a valid card number."),
        ("expiry", "1/29", "Expiry must be in MM/YY format."),
        ("expiry", "01/20", "Card is expired."),
        ("cvv", "12", "CVV must be 3-4 digits."),
        ("zip", "12a", "Enter a valid ZIP/Postal code."),
    ];

    for (field, value, message) in cases {
        let mut details = card();
        match field {
            "cardholder" => details.cardholder = value.to_string(),
            "card_number" => details.card_number = value.to_string(),
            "expiry" => details.expiry = value.to_string(),
            "cvv" => details.cvv = value.to_string(),
            _ => details.zip = value.to_string(),
        }
        let err = ctx.checkout_service.checkout(&email, &details).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "{}", field);
        assert_eq!(err.to_string(), message);
    }

    assert!(ctx.order_service.list_orders(&email).is_empty());
    assert_eq!(ctx.cart_service.total_count(&email), 1);
}

#[test]
fn test_card_helpers() {
    assert!(luhn_check("4111111111111111"));
    assert!(!luhn_check("4111111111111112"));
    assert!(!luhn_check("4111-1111-1111-1111"));
    assert!(!luhn_check("41111111111"));
    assert_eq!(parse_expiry("01/29"), Some(Expiry { month: 1, year: 2029 }));
    assert_eq!(parse_expiry("13/29"), None);
    assert_eq!(parse_expiry("1/29"), None);
}
