//! One-ply minimax over an injected opponent model.

use super::{legal_moves, simulate, Move, Strategy};
use crate::core::PlayerColor;
use crate::engine::Game;

/// Default weight of the score difference in the position evaluation.
pub const DEFAULT_SCORE_WEIGHT: i64 = 3;

/// Fallible strategy: pick the move whose simulated opponent reply leaves
/// us the least bad position.
///
/// For every legal move: simulate it, ask the opponent model for a reply
/// on the resulting position, simulate that reply, and evaluate
/// `weight * (their score - our score) + (their cells - our cells)`;
/// lower is better for us. A move the opponent has no answer to is
/// maximally favorable. Simulation or evaluation failures score a neutral
/// 0 and are never propagated. Ties keep the first legal move; `None` is
/// returned only when no legal move exists.
///
/// The weight is an unexplained tuning constant, not a rule; use
/// [`Minimax::with_weight`] to replace it.
#[derive(Clone, Debug)]
pub struct Minimax<S> {
    opponent_model: S,
    score_weight: i64,
}

impl<S: Strategy> Minimax<S> {
    /// Minimax with the default score weight.
    #[must_use]
    pub fn new(opponent_model: S) -> Self {
        Self::with_weight(opponent_model, DEFAULT_SCORE_WEIGHT)
    }

    /// Minimax with an explicit score weight.
    #[must_use]
    pub fn with_weight(opponent_model: S, score_weight: i64) -> Self {
        Self {
            opponent_model,
            score_weight,
        }
    }

    /// Value of `mv` for `me`; lower is better.
    fn evaluate(&mut self, game: &Game, me: PlayerColor, mv: Move) -> i64 {
        let Some(after) = simulate(game, mv) else {
            return 0;
        };
        let Some(reply) = self.opponent_model.choose_move(&after) else {
            return i64::MIN;
        };
        let Some(settled) = simulate(&after, reply) else {
            return 0;
        };

        let Ok(scores) = settled.total_scores() else {
            return 0;
        };
        let (Ok(my_cells), Ok(their_cells)) = (
            settled.owned_cell_count(me),
            settled.owned_cell_count(me.opponent()),
        ) else {
            return 0;
        };

        let score_diff =
            i64::from(scores[me.opponent()]) - i64::from(scores[me]);
        let cell_diff = their_cells as i64 - my_cells as i64;
        self.score_weight * score_diff + cell_diff
    }
}

impl<S: Strategy> Strategy for Minimax<S> {
    fn choose_move(&mut self, game: &Game) -> Option<Move> {
        let me = game.current_player().ok()?;

        let mut best: Option<(i64, Move)> = None;
        for mv in legal_moves(game) {
            let value = self.evaluate(game, me, mv);
            match best {
                Some((best_value, _)) if value >= best_value => {}
                _ => best = Some((value, mv)),
            }
        }
        best.map(|(_, mv)| mv)
    }
}
