//! Player domain module
//!
//! Walks a session's ordered instruction list, one single-shot timer per
//! timed step. `PlayerMachine` is the synchronous state machine;
//! `PlayerRunner` owns the real tokio timer task that drives it.

pub mod machine;
pub mod runner;

pub use machine::{PendingTimer, PlayerMachine, PlayerMode};
pub use runner::PlayerRunner;
