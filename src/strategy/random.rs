//! Seeded random baseline.

use super::{legal_moves, Move, Strategy};
use crate::core::GameRng;
use crate::engine::Game;

/// Uniform choice among legal placements, Pass when none exist.
///
/// Deterministic for a fixed seed, which makes it a convenient opponent
/// model in search tests and a floor for strategy comparisons.
#[derive(Clone, Debug)]
pub struct Random {
    rng: GameRng,
}

impl Random {
    /// A random strategy seeded for reproducibility.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Build from an existing RNG, e.g. a fork of a session RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for Random {
    fn choose_move(&mut self, game: &Game) -> Option<Move> {
        if !game.has_started() || game.is_over() {
            return None;
        }
        let moves = legal_moves(game);
        if moves.is_empty() {
            return Some(Move::Pass);
        }
        Some(moves[self.rng.index(moves.len())])
    }
}
