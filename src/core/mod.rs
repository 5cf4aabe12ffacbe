//! Core types: player colors, per-player storage, errors, RNG.
//!
//! These are the building blocks the rest of the crate is written against.
//! Nothing here knows about boards, cards, or strategies.

pub mod error;
pub mod player;
pub mod rng;

pub use error::RulesError;
pub use player::{PerPlayer, PlayerColor};
pub use rng::GameRng;
