//! Move selection: the `Move` type, the `Strategy` trait, and the
//! policies built on them.
//!
//! Strategies consume only the engine's read-only observation contract
//! plus [`Game::snapshot`] for lookahead; they never mutate the live game.
//! A strategy that declines to move returns `None`: infallible policies
//! (`FillFirst`, `MaximizeRowScore`, `Chained` over an infallible
//! fallback) return `Some(Move::Pass)` at worst while the game is in
//! progress, fallible ones (`ControlBoard`, `Minimax`) may legitimately
//! return `None`.
//!
//! Simulation failures are never propagated: a candidate whose snapshot
//! rejects the move is simply unusable.

pub mod chained;
pub mod control_board;
pub mod fill_first;
pub mod max_row_score;
pub mod minimax;
pub mod random;

pub use chained::Chained;
pub use control_board::ControlBoard;
pub use fill_first::FillFirst;
pub use max_row_score::MaximizeRowScore;
pub use minimax::Minimax;
pub use random::Random;

use serde::{Deserialize, Serialize};

use crate::engine::Game;

/// One decision: place a hand card somewhere, or pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place hand card `card` at `(row, col)`.
    Place {
        /// Index into the acting player's hand.
        card: usize,
        row: usize,
        col: usize,
    },
    /// Decline to place anything this turn.
    Pass,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { card, row, col } => {
                write!(f, "place card {card} at ({row}, {col})")
            }
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// A move-selection policy acting for the game's current player.
pub trait Strategy {
    /// Choose a move, or `None` to decline (or when the game is not in
    /// progress).
    fn choose_move(&mut self, game: &Game) -> Option<Move>;
}

/// Enumerate every legal placement, in (card index, row, column) order.
///
/// Pass is always available while the game runs and is deliberately not
/// included. Empty when the game is not in progress.
#[must_use]
pub fn legal_moves(game: &Game) -> Vec<Move> {
    let mut moves = Vec::new();
    let Ok((rows, cols)) = game.dimensions() else {
        return moves;
    };
    let hand_len = game
        .current_player()
        .and_then(|player| game.hand(player))
        .map_or(0, im::Vector::len);

    for card in 0..hand_len {
        for row in 0..rows {
            for col in 0..cols {
                if game.is_legal_move(card, row, col).unwrap_or(false) {
                    moves.push(Move::Place { card, row, col });
                }
            }
        }
    }
    moves
}

/// Apply `mv` to a fresh snapshot.
///
/// `None` means the candidate is unusable: the simulation rejected it for
/// any reason. The live game is never touched.
#[must_use]
pub fn simulate(game: &Game, mv: Move) -> Option<Game> {
    let mut copy = game.snapshot();
    let result = match mv {
        Move::Place { card, row, col } => copy.place_card(card, row, col),
        Move::Pass => copy.pass_turn(),
    };
    result.ok().map(|()| copy)
}
