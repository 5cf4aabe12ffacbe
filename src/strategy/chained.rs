//! Fallback composition of strategies.

use super::{Move, Strategy};
use crate::engine::Game;

/// Try strategies in order; fall back to a terminal strategy.
///
/// The first non-declining strategy wins. The terminal fallback is
/// required at construction, so a chain is exactly as infallible as its
/// fallback; there is no "nothing configured" runtime condition.
///
/// ## Example
///
/// ```
/// use pawnfall::strategy::{Chained, ControlBoard, FillFirst, Strategy};
/// use pawnfall::engine::Game;
///
/// let mut chain = Chained::new(vec![Box::new(ControlBoard)], Box::new(FillFirst));
/// let game = Game::new();
/// // Not started: even the fallback declines.
/// assert_eq!(chain.choose_move(&game), None);
/// ```
pub struct Chained {
    strategies: Vec<Box<dyn Strategy>>,
    fallback: Box<dyn Strategy>,
}

impl Chained {
    /// Compose `strategies` in order with a mandatory terminal `fallback`.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn Strategy>>, fallback: Box<dyn Strategy>) -> Self {
        Self {
            strategies,
            fallback,
        }
    }
}

impl Strategy for Chained {
    fn choose_move(&mut self, game: &Game) -> Option<Move> {
        for strategy in &mut self.strategies {
            if let Some(mv) = strategy.choose_move(game) {
                return Some(mv);
            }
        }
        self.fallback.choose_move(game)
    }
}

impl std::fmt::Debug for Chained {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chained")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}
