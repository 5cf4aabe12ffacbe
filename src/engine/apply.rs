//! Placement-time influence application.
//!
//! When a card lands at `(row, col)`, its 5×5 grid is walked with the
//! center mapped onto the placement cell. Blue's grids are mirrored
//! left-right first so the two sides play symmetric patterns. The center
//! and anything mapped off the board are skipped; every remaining symbol
//! dispatches to its single-cell behavior on the target.

use smallvec::SmallVec;

use super::board::Board;
use crate::cards::{Card, Influence, GRID_CENTER, GRID_SIZE};
use crate::core::PlayerColor;

/// Project `card`'s influence from its placement at `(row, col)` by
/// `acting` onto the board, in row-major grid order.
pub(crate) fn apply_influence(board: &mut Board, card: &Card, row: usize, col: usize, acting: PlayerColor) {
    let grid = match acting {
        PlayerColor::Red => *card.influence(),
        PlayerColor::Blue => card.influence().mirrored(),
    };

    // At most 24 non-center targets; resolved strictly in grid order.
    let mut targets: SmallVec<[(usize, usize, Influence); 24]> = SmallVec::new();

    for gr in 0..GRID_SIZE {
        for gc in 0..GRID_SIZE {
            if gr == GRID_CENTER && gc == GRID_CENTER {
                continue;
            }
            let symbol = grid.get(gr, gc);
            if symbol == Influence::Blank {
                continue;
            }

            let Some(target_row) = (row + gr).checked_sub(GRID_CENTER) else {
                continue;
            };
            let Some(target_col) = (col + gc).checked_sub(GRID_CENTER) else {
                continue;
            };
            if !board.in_bounds(target_row, target_col) {
                continue;
            }

            targets.push((target_row, target_col, symbol));
        }
    }

    for (target_row, target_col, symbol) in targets {
        // In bounds by construction.
        let Ok(cell) = board.cell_mut(target_row, target_col) else {
            continue;
        };
        match symbol {
            Influence::Regular => cell.apply_regular(acting),
            Influence::Upgrading => cell.upgrade(),
            Influence::Devaluing => cell.devalue(),
            Influence::Blank => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, InfluenceGrid};

    fn card_with(rows: [&str; 5]) -> Card {
        Card::new("Test", 1, 2, InfluenceGrid::from_rows(&rows).unwrap()).unwrap()
    }

    #[test]
    fn test_regular_influence_adds_pawns_around_center() {
        let mut board = Board::empty(3, 5).unwrap();
        let card = card_with(["XXXXX", "XXIXX", "XICIX", "XXIXX", "XXXXX"]);

        apply_influence(&mut board, &card, 1, 2, PlayerColor::Red);

        for (r, c) in [(0, 2), (1, 1), (1, 3), (2, 2)] {
            let cell = board.cell(r, c).unwrap();
            assert_eq!(cell.owner(), Some(PlayerColor::Red), "({r}, {c})");
            assert_eq!(cell.pawn_count(), 1);
        }
        assert!(board.cell(1, 2).unwrap().is_empty(), "center is never a target");
    }

    #[test]
    fn test_out_of_bounds_targets_skipped() {
        let mut board = Board::empty(3, 5).unwrap();
        let card = card_with(["XXIXX", "XXXXX", "IXCXI", "XXXXX", "XXIXX"]);

        // Placement in the corner: up and left targets fall off the board.
        apply_influence(&mut board, &card, 0, 0, PlayerColor::Red);

        assert_eq!(board.cell(0, 2).unwrap().pawn_count(), 1);
        assert_eq!(board.cell(2, 0).unwrap().pawn_count(), 1);
    }

    #[test]
    fn test_blue_grid_is_mirrored() {
        let mut board = Board::empty(3, 5).unwrap();
        // Red reading: influence two to the right of center.
        let card = card_with(["XXXXX", "XXXXX", "XXCXI", "XXXXX", "XXXXX"]);

        apply_influence(&mut board, &card, 1, 2, PlayerColor::Blue);

        // Mirrored for Blue: lands two to the left instead.
        assert_eq!(board.cell(1, 0).unwrap().owner(), Some(PlayerColor::Blue));
        assert!(board.cell(1, 4).unwrap().is_empty());
    }

    #[test]
    fn test_regular_flips_opposing_pawns() {
        let mut board = Board::empty(3, 5).unwrap();
        board.cell_mut(1, 3).unwrap().add_pawn(PlayerColor::Blue).unwrap();
        board.cell_mut(1, 3).unwrap().add_pawn(PlayerColor::Blue).unwrap();

        let card = card_with(["XXXXX", "XXXXX", "XXCIX", "XXXXX", "XXXXX"]);
        apply_influence(&mut board, &card, 1, 2, PlayerColor::Red);

        let flipped = board.cell(1, 3).unwrap();
        assert_eq!(flipped.owner(), Some(PlayerColor::Red));
        assert_eq!(flipped.pawn_count(), 2);
    }

    #[test]
    fn test_upgrading_and_devaluing_adjust_modifiers() {
        let mut board = Board::empty(3, 5).unwrap();
        let card = card_with(["XXXXX", "XXUXX", "XXCXX", "XXDXX", "XXXXX"]);

        apply_influence(&mut board, &card, 1, 2, PlayerColor::Red);

        assert_eq!(board.cell(0, 2).unwrap().value_modifier(), 1);
        assert_eq!(board.cell(2, 2).unwrap().value_modifier(), -1);
    }

    #[test]
    fn test_devaluing_destroys_weak_card() {
        let mut board = Board::empty(3, 5).unwrap();
        let victim = Card::new("Victim", 2, 1, InfluenceGrid::empty()).unwrap();
        board.cell_mut(1, 3).unwrap().set_card(victim, PlayerColor::Blue);

        let card = card_with(["XXXXX", "XXXXX", "XXCDX", "XXXXX", "XXXXX"]);
        apply_influence(&mut board, &card, 1, 2, PlayerColor::Red);

        let cell = board.cell(1, 3).unwrap();
        assert_eq!(cell.card(), None);
        assert_eq!(cell.owner(), Some(PlayerColor::Blue));
        assert_eq!(cell.pawn_count(), 2);
        assert_eq!(cell.value_modifier(), 0);
    }
}
