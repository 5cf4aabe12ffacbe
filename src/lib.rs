//! # pawnfall
//!
//! A rules engine and adversarial move-selection layer for a two-player
//! pawn-and-influence grid card game.
//!
//! Players place cards from a hand onto cells they control via pawns;
//! each placed card projects a 5×5 influence pattern that adds pawns,
//! flips ownership, or shifts the score value of whatever card ends up on
//! a neighboring cell. Scoring is per row: the strictly higher row total
//! takes the whole row.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: all mutation goes through `start_game`,
//!    `place_card`, and `pass_turn`; everything else is read-only
//!    observation. A failed mutation leaves state untouched.
//!
//! 2. **Snapshots over shared state**: `Game::snapshot()` yields a fully
//!    independent copy (hands and decks are `im` persistent structures,
//!    so copies are cheap). The whole strategy layer is sequential tree
//!    exploration over disposable snapshots: no aliasing, no locking.
//!
//! 3. **Closed variants over subclassing**: influence symbols, cell
//!    content, and the error taxonomy are closed enums; the persistent
//!    value modifier is part of every cell rather than a special subtype.
//!
//! ## Modules
//!
//! - `core`: player colors, per-player storage, errors, deterministic RNG
//! - `cards`: the immutable card value type, influence grids, deck parsing
//! - `engine`: cell, board, influence application, scoring, the game
//!   state machine, and the observer boundary
//! - `strategy`: the `Move` type, the `Strategy` trait, and the policies
//!   (fill-first, row-score, board-control, minimax, chaining, random)

pub mod cards;
pub mod core;
pub mod engine;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameRng, PerPlayer, PlayerColor, RulesError};

pub use crate::cards::{
    parse_deck, validate_deck, Card, DeckError, Influence, InfluenceGrid, GRID_CENTER, GRID_SIZE,
};

pub use crate::engine::{
    Board, Cell, CellContent, Game, GameObserver, ObserverId, MAX_PAWNS,
};

pub use crate::strategy::{
    legal_moves, simulate, Chained, ControlBoard, FillFirst, MaximizeRowScore, Minimax, Move,
    Random, Strategy,
};
