//! Stillpoint Core Library
//!
//! This crate provides the core functionality for Stillpoint, including:
//! - Catalog of meditation sessions with ordered, timed instructions
//! - Storage (SQLite via sqlx, versioned migrations)
//! - Player state machine with single-shot step timers
//! - Configuration management

pub mod config;
pub mod domain;
pub mod error;
pub mod storage;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::domain::catalog::{CatalogService, DifficultyLevel, MeditationType};
    pub use crate::domain::player::{PlayerMachine, PlayerMode, PlayerRunner};
    pub use crate::error::{Error, Result};
    pub use crate::storage::Database;
}
