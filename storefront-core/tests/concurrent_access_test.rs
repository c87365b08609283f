//! Concurrent store access tests
//!
//! Several threads sharing one store must not lose each other's keys, and
//! separate handles on the same file must open cleanly one after another.
//!
//! Run with: cargo test --test concurrent_access_test -- --nocapture

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Instant;
use tempfile::TempDir;

use storefront_core::adapters::duckdb::DuckDbStore;
use storefront_core::config::Config;
use storefront_core::ports::KeyValueStore;
use storefront_core::{StorefrontContext, STORE_FILE};

/// Number of concurrent shoppers
const THREAD_COUNT: usize = 6;

/// Cart additions per shopper
const ITERATIONS_PER_THREAD: usize = 5;

/// Each thread fills its own shopper's cart through a shared context.
/// Per-user keys never collide, so every addition must survive.
#[test]
fn test_parallel_shoppers_share_one_store() {
    let temp_dir = TempDir::new().unwrap();
    let backend = DuckDbStore::new(&temp_dir.path().join(STORE_FILE)).unwrap();
    backend.ensure_schema().unwrap();
    let ctx = Arc::new(StorefrontContext::with_store(Config::default(), Arc::new(backend)).unwrap());

    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let mut handles = vec![];

    for thread_id in 0..THREAD_COUNT {
        let barrier = Arc::clone(&barrier);
        let ctx = Arc::clone(&ctx);

        handles.push(thread::spawn(move || {
            let email = format!("shopper{}@example.com", thread_id);
            barrier.wait();
            for _ in 0..ITERATIONS_PER_THREAD {
                ctx.cart_service.add_or_increment(&email, "neo-chrono").unwrap();
            }
            email
        }));
    }

    for handle in handles {
        let email = handle.join().unwrap();
        assert_eq!(
            ctx.cart_service.total_count(&email) as usize,
            ITERATIONS_PER_THREAD,
            "{} lost cart updates",
            email
        );
    }
}

/// Raw writes from many threads all land
#[test]
fn test_parallel_raw_writes() {
    let store = Arc::new(DuckDbStore::in_memory().unwrap());
    store.ensure_schema().unwrap();

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..ITERATIONS_PER_THREAD {
                    store
                        .set_raw(&format!("k{}_{}", thread_id, i), "1")
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.keys().unwrap().len(), THREAD_COUNT * ITERATIONS_PER_THREAD);
}

/// Open and close the store file repeatedly
#[test]
fn test_sequential_reopen() {
    let temp_dir = TempDir::new().unwrap();

    for i in 0..5 {
        let start = Instant::now();
        let ctx = StorefrontContext::new(temp_dir.path()).unwrap();
        ctx.auth_service
            .signup(&format!("user{}@example.com", i), "secret1")
            .unwrap();
        println!("Open {}: {:?}", i, start.elapsed());
    }

    let ctx = StorefrontContext::new(temp_dir.path()).unwrap();
    for i in 0..5 {
        assert!(ctx.auth_service.exists(&format!("user{}@example.com", i)));
    }
}
