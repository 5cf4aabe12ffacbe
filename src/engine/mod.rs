//! The rules engine: cells, board, influence application, scoring, the
//! game state machine, and the event boundary.
//!
//! ## Key Types
//!
//! - `Cell` / `CellContent`: one grid position and its `{Empty, Pawns,
//!   Card}` state machine
//! - `Board`: flat row-major grid, fixed dimensions
//! - `Game`: the `NotStarted → InProgress → Over` state machine with the
//!   mutating operations (`start_game`, `place_card`, `pass_turn`), the
//!   read-only observation contract, and independent snapshots
//! - `GameObserver`: the synchronous notification boundary

mod apply;
pub mod board;
pub mod cell;
pub mod events;
pub mod game;
pub mod score;

pub use board::Board;
pub use cell::{Cell, CellContent, MAX_PAWNS};
pub use events::{GameObserver, ObserverId};
pub use game::Game;
