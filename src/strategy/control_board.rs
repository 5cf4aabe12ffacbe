//! Cell-control strategy.

use super::{legal_moves, simulate, Move, Strategy};
use crate::engine::Game;

/// Fallible strategy: maximize owned cells, or decline.
///
/// Every legal placement is simulated and the resulting number of cells
/// the acting player controls is compared against the do-nothing
/// baseline. Only a strict improvement is accepted; ties between equally
/// good moves break by topmost row, then leftmost column, then leftmost
/// card index. Returns `None` when no placement beats the baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlBoard;

impl Strategy for ControlBoard {
    fn choose_move(&mut self, game: &Game) -> Option<Move> {
        let me = game.current_player().ok()?;
        let baseline = game.owned_cell_count(me).ok()?;

        let mut best: Option<(usize, (usize, usize, usize), Move)> = None;
        for mv in legal_moves(game) {
            let Move::Place { card, row, col } = mv else {
                continue;
            };
            let Some(after) = simulate(game, mv) else {
                continue;
            };
            let Ok(owned) = after.owned_cell_count(me) else {
                continue;
            };
            if owned <= baseline {
                continue;
            }

            let key = (row, col, card);
            let better = match &best {
                None => true,
                Some((best_owned, best_key, _)) => {
                    owned > *best_owned || (owned == *best_owned && key < *best_key)
                }
            };
            if better {
                best = Some((owned, key, mv));
            }
        }

        best.map(|(_, _, mv)| mv)
    }
}
