//! Core engine types: players, round state, actions, RNG, configuration,
//! errors.
//!
//! These are the building blocks the rules operate on. Tunable numbers come
//! from `GameConfig` rather than literals in the rules.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord, CardIndices};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use state::{PlayerView, RoundState, RoundView};
