//! First-legal-placement strategy.

use super::{Move, Strategy};
use crate::core::PlayerColor;
use crate::engine::Game;

/// Infallible strategy: the first legal placement found, else Pass.
///
/// Scans the hand left to right; for each card, rows top to bottom and
/// columns from the acting player's own side of the board inward (Red
/// left-to-right, Blue right-to-left).
#[derive(Clone, Copy, Debug, Default)]
pub struct FillFirst;

impl Strategy for FillFirst {
    fn choose_move(&mut self, game: &Game) -> Option<Move> {
        if !game.has_started() || game.is_over() {
            return None;
        }
        let (rows, cols) = game.dimensions().ok()?;
        let me = game.current_player().ok()?;
        let hand_len = game.hand(me).ok()?.len();

        for card in 0..hand_len {
            for row in 0..rows {
                for i in 0..cols {
                    let col = match me {
                        PlayerColor::Red => i,
                        PlayerColor::Blue => cols - 1 - i,
                    };
                    if game.is_legal_move(card, row, col).unwrap_or(false) {
                        return Some(Move::Place { card, row, col });
                    }
                }
            }
        }

        Some(Move::Pass)
    }
}
