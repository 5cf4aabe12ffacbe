//! The board: a flat, row-major grid of cells.
//!
//! Dimensions are fixed at construction (`rows > 0`, odd `cols > 1`) and
//! never change. The flat `Vec<Cell>` keeps snapshots a single structural
//! clone rather than a nested collection copy.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::core::{PlayerColor, RulesError};

/// The playing grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board, validating the dimension rules.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, RulesError> {
        if rows == 0 || cols <= 1 || cols % 2 == 0 {
            return Err(RulesError::InvalidDimensions { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
        })
    }

    /// Create a board in the game's start state: one Red pawn per cell of
    /// column 0, one Blue pawn per cell of the last column.
    pub fn starting(rows: usize, cols: usize) -> Result<Self, RulesError> {
        let mut board = Self::empty(rows, cols)?;
        for r in 0..rows {
            board.cell_mut(r, 0)?.add_pawn(PlayerColor::Red)?;
            board.cell_mut(r, cols - 1)?.add_pawn(PlayerColor::Blue)?;
        }
        Ok(board)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, RulesError> {
        let i = self.index_of(row, col)?;
        Ok(&self.cells[i])
    }

    /// Mutable access to the cell at `(row, col)`.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, RulesError> {
        let i = self.index_of(row, col)?;
        Ok(&mut self.cells[i])
    }

    /// Iterate cells row-major with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| ((i / self.cols, i % self.cols), cell))
    }

    /// Iterate the cells of one row left to right.
    pub fn row(&self, row: usize) -> Result<impl Iterator<Item = &Cell>, RulesError> {
        if row >= self.rows {
            return Err(RulesError::OutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row * self.cols;
        Ok(self.cells[start..start + self.cols].iter())
    }

    /// Count cells controlled by `player` (pawns or cards).
    #[must_use]
    pub fn owned_cell_count(&self, player: PlayerColor) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, RulesError> {
        if self.in_bounds(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(RulesError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}
