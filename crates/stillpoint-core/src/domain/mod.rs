//! Domain layer - catalog entities and the player state machine

pub mod catalog;
pub mod player;

pub use catalog::{
    CatalogService, DifficultyLevel, MeditationCategory, MeditationInstruction, MeditationSession,
    MeditationType, NewCategory, NewInstruction, NewSession, SessionDetail,
};
pub use player::{PlayerMachine, PlayerMode, PlayerRunner};
