//! Catalog domain module
//!
//! The meditation catalog: sessions, their ordered instruction steps, and
//! the categories used to group them. The `CatalogService` is the single
//! entry point for reads and writes; all field constraints are enforced
//! there before anything touches storage.

pub mod entity;
pub mod repository;
pub mod sample;
pub mod service;
pub mod validation;

pub use entity::{
    DifficultyLevel, MeditationCategory, MeditationInstruction, MeditationSession, MeditationType,
    NewCategory, NewInstruction, NewSession, SessionDetail,
};
pub use repository::CatalogRepository;
pub use service::CatalogService;
