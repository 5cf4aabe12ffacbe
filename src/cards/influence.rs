//! Influence symbols and the 5×5 influence grid.
//!
//! Every card carries a 5×5 grid centered on its placement cell. Each
//! non-center symbol names one single-cell effect:
//!
//! - `Regular` (`I`): add a pawn, grow a friendly stack, or flip an
//!   opposing stack.
//! - `Upgrading` (`U`): raise the target cell's persistent value modifier.
//! - `Devaluing` (`D`): lower it, destroying a card driven to zero.
//! - `Blank` (`X`): no effect.
//!
//! The center (`C`) marks the placement point and is never itself a target.
//! The symbol set is closed: there is deliberately no way to extend it.

use serde::{Deserialize, Serialize};

use super::deck::DeckError;

/// Side length of an influence grid.
pub const GRID_SIZE: usize = 5;

/// Row and column of the placement point within the grid.
pub const GRID_CENTER: usize = 2;

/// One influence symbol, applied to exactly one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Influence {
    /// No effect.
    #[default]
    Blank,
    /// Add / grow / flip pawns on the target cell.
    Regular,
    /// Raise the target cell's persistent value modifier by 1.
    Upgrading,
    /// Lower the target cell's persistent value modifier by 1.
    Devaluing,
}

impl Influence {
    /// Canonical character for this symbol (`X`, `I`, `U`, `D`).
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Influence::Blank => 'X',
            Influence::Regular => 'I',
            Influence::Upgrading => 'U',
            Influence::Devaluing => 'D',
        }
    }

    /// Parse a canonical character. `C` is not a symbol; it marks the
    /// center and is handled by [`InfluenceGrid::from_rows`].
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Influence::Blank),
            'I' => Some(Influence::Regular),
            'U' => Some(Influence::Upgrading),
            'D' => Some(Influence::Devaluing),
            _ => None,
        }
    }
}

/// A 5×5 influence pattern.
///
/// The center cell is always `Blank` in the typed form; the canonical
/// character form renders it as `C`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfluenceGrid {
    cells: [[Influence; GRID_SIZE]; GRID_SIZE],
}

impl InfluenceGrid {
    /// The all-blank grid: a card with no influence beyond its placement.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Influence::Blank; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from five 5-character rows over `{X,I,U,D,C}`.
    ///
    /// Exactly one `C` must appear, at the grid's center.
    pub fn from_rows(rows: &[&str]) -> Result<Self, DeckError> {
        if rows.len() != GRID_SIZE {
            return Err(DeckError::BadGridShape { rows: rows.len() });
        }

        let mut cells = [[Influence::Blank; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != GRID_SIZE {
                return Err(DeckError::BadGridRow {
                    row: r,
                    text: (*row).to_string(),
                });
            }
            for (c, ch) in chars.iter().enumerate() {
                let is_center = r == GRID_CENTER && c == GRID_CENTER;
                match (*ch, is_center) {
                    ('C', true) => cells[r][c] = Influence::Blank,
                    ('C', false) => {
                        return Err(DeckError::MisplacedCenter { row: r, col: c });
                    }
                    (ch, true) => {
                        return Err(DeckError::MissingCenter { found: ch });
                    }
                    (ch, false) => {
                        cells[r][c] = Influence::from_char(ch).ok_or(DeckError::BadSymbol {
                            row: r,
                            col: c,
                            symbol: ch,
                        })?;
                    }
                }
            }
        }

        Ok(Self { cells })
    }

    /// The symbol at grid position `(row, col)`.
    ///
    /// Positions are grid-local (`0..5`); the caller maps them onto the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Influence {
        self.cells[row][col]
    }

    /// The grid flipped left-right.
    ///
    /// Applied for the player whose home column is the far side of the
    /// board, so patterns stay symmetric between the two sides.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut cells = self.cells;
        for row in &mut cells {
            row.reverse();
        }
        Self { cells }
    }

    /// Canonical character rows, with `C` at the center.
    #[must_use]
    pub fn char_rows(&self) -> [String; GRID_SIZE] {
        std::array::from_fn(|r| {
            (0..GRID_SIZE)
                .map(|c| {
                    if r == GRID_CENTER && c == GRID_CENTER {
                        'C'
                    } else {
                        self.cells[r][c].to_char()
                    }
                })
                .collect()
        })
    }
}
