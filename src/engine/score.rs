//! Row and total scoring.
//!
//! A player's row score is the sum of effective values of their cards in
//! that row. Each row's points go wholly to whichever player holds the
//! strictly greater row score; a tied row awards nothing to either side.

use super::board::Board;
use crate::core::{PerPlayer, PlayerColor, RulesError};

/// Both players' scores for one row.
pub fn row_scores(board: &Board, row: usize) -> Result<PerPlayer<u32>, RulesError> {
    let mut scores = PerPlayer::with_value(0u32);
    for cell in board.row(row)? {
        if let (Some(owner), Some(value)) = (cell.owner(), cell.effective_value()) {
            scores[owner] += value;
        }
    }
    Ok(scores)
}

/// Total scores: per-row points awarded to the strictly higher side.
#[must_use]
pub fn total_scores(board: &Board) -> PerPlayer<u32> {
    let mut totals = PerPlayer::with_value(0u32);
    for row in 0..board.rows() {
        // Row index is in range, so row_scores cannot fail.
        let Ok(scores) = row_scores(board, row) else {
            continue;
        };
        let red = scores[PlayerColor::Red];
        let blue = scores[PlayerColor::Blue];
        if red > blue {
            totals[PlayerColor::Red] += red;
        } else if blue > red {
            totals[PlayerColor::Blue] += blue;
        }
    }
    totals
}
