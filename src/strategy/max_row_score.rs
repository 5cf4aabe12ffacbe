//! Row-flipping strategy.

use super::{simulate, Move, Strategy};
use crate::engine::Game;

/// Infallible strategy: win a row, else Pass.
///
/// Scans rows top to bottom. For each row where the acting player's score
/// does not already exceed the opponent's, every legal (card, column)
/// placement in that row is tried on a disposable snapshot; the first one
/// that makes the player's row score strictly exceed the opponent's is
/// taken.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaximizeRowScore;

impl Strategy for MaximizeRowScore {
    fn choose_move(&mut self, game: &Game) -> Option<Move> {
        if !game.has_started() || game.is_over() {
            return None;
        }
        let (rows, cols) = game.dimensions().ok()?;
        let me = game.current_player().ok()?;
        let opponent = me.opponent();
        let hand_len = game.hand(me).ok()?.len();

        for row in 0..rows {
            let Ok(current) = game.row_scores(row) else {
                continue;
            };
            if current[me] > current[opponent] {
                continue;
            }

            for card in 0..hand_len {
                for col in 0..cols {
                    if !game.is_legal_move(card, row, col).unwrap_or(false) {
                        continue;
                    }
                    let mv = Move::Place { card, row, col };
                    let Some(after) = simulate(game, mv) else {
                        continue;
                    };
                    let Ok(scores) = after.row_scores(row) else {
                        continue;
                    };
                    if scores[me] > scores[opponent] {
                        return Some(mv);
                    }
                }
            }
        }

        Some(Move::Pass)
    }
}
