//! Storage layer
//!
//! SQLite persistence for the meditation catalog: connection pool
//! management and versioned schema migrations.

pub mod database;
pub mod migrations;

pub use database::{Database, DatabaseConfig, default_database_path};
pub use migrations::{CURRENT_VERSION, MigrationStatus, migration_status, run_migrations};
