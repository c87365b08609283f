//! Event log migrations for logs.duckdb
//!
//! Kept apart from the store migrations: the log lives in its own file so
//! it can be cleared or exported without touching shopper data. Applied by
//! the same `MigrationService` as the store schema.

/// Event log migrations, embedded at compile time as (filename, sql_content)
pub const LOG_MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    ("001_initial_schema.sql", include_str!("001_initial_schema.sql")),
];
