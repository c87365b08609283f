//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - DuckDB for the KeyValueStore port (the on-disk store)
//! - An in-memory map for the KeyValueStore port (tests, throwaway stores)
//! - A simulated processor for the PaymentGateway port
//! - Demo catalog data used to seed an empty store

pub mod demo;
pub mod duckdb;
pub mod memory;
pub mod simulated;
