//! Deck parsing and boundary validation.
//!
//! The engine consumes ordered `Vec<Card>` lists; it never touches the
//! filesystem. This module implements the textual deck contract those
//! lists usually come from:
//!
//! ```text
//! Security 1 2
//! XXXXX
//! XXIXX
//! XICIX
//! XXIXX
//! XXXXX
//! ```
//!
//! Each card is a `name cost value` header followed by five 5-character
//! rows over `{X,I,U,D,C}` with exactly one `C` at the grid center.
//! Blank lines between cards are ignored.
//!
//! [`validate_deck`] enforces the size and duplication invariants the
//! engine re-checks at `start_game` time.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::card::Card;
use super::influence::{InfluenceGrid, GRID_SIZE};

/// Everything that can be wrong with deck data or a single card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A header line does not parse as `name cost value`.
    #[error("line {line}: expected `name cost value`, got {text:?}")]
    MalformedHeader { line: usize, text: String },

    /// A card header was not followed by five grid rows.
    #[error("card {name:?} is missing influence grid rows")]
    TruncatedCard { name: String },

    /// A card name must be non-empty.
    #[error("card name must be non-empty")]
    EmptyName,

    /// Cost must be 1, 2, or 3.
    #[error("card {name:?} has cost {cost}, expected 1..=3")]
    BadCost { name: String, cost: u8 },

    /// Value must be at least 1.
    #[error("card {name:?} has value {value}, expected at least 1")]
    BadValue { name: String, value: u32 },

    /// An influence grid needs exactly five rows.
    #[error("influence grid has {rows} rows, expected {GRID_SIZE}")]
    BadGridShape { rows: usize },

    /// An influence grid row needs exactly five characters.
    #[error("influence grid row {row} is {text:?}, expected 5 characters")]
    BadGridRow { row: usize, text: String },

    /// Only `X`, `I`, `U`, `D`, and `C` are legal grid characters.
    #[error("illegal influence symbol {symbol:?} at grid position ({row}, {col})")]
    BadSymbol { row: usize, col: usize, symbol: char },

    /// `C` must sit at the grid center, nowhere else.
    #[error("center marker C at grid position ({row}, {col}), expected (2, 2)")]
    MisplacedCenter { row: usize, col: usize },

    /// The grid center must be the `C` marker.
    #[error("grid center holds {found:?}, expected the C marker")]
    MissingCenter { found: char },

    /// The deck is smaller than the board demands.
    #[error("deck has {len} cards but at least {required} are required")]
    TooFewCards { len: usize, required: usize },

    /// At most two cards may share a name.
    #[error("deck holds more than two copies of {name:?}")]
    TooManyCopies { name: String },

    /// Two same-named cards must be structurally identical.
    #[error("deck holds two different cards both named {name:?}")]
    MismatchedCopies { name: String },
}

/// Parse a whole deck from its textual form, preserving card order.
pub fn parse_deck(text: &str) -> Result<Vec<Card>, DeckError> {
    let mut cards = Vec::new();
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());

    while let Some((line_no, header)) = lines.next() {
        let tokens: Vec<&str> = header.split_whitespace().collect();
        let &[name, cost, value] = tokens.as_slice() else {
            return Err(DeckError::MalformedHeader {
                line: line_no + 1,
                text: header.trim().to_string(),
            });
        };
        let (Ok(cost), Ok(value)) = (cost.parse::<u8>(), value.parse::<u32>()) else {
            return Err(DeckError::MalformedHeader {
                line: line_no + 1,
                text: header.trim().to_string(),
            });
        };

        let mut rows = Vec::with_capacity(GRID_SIZE);
        for _ in 0..GRID_SIZE {
            match lines.next() {
                Some((_, row)) => rows.push(row.trim()),
                None => {
                    return Err(DeckError::TruncatedCard {
                        name: name.to_string(),
                    })
                }
            }
        }

        let grid = InfluenceGrid::from_rows(&rows)?;
        cards.push(Card::new(name, cost, value, grid)?);
    }

    Ok(cards)
}

/// Check the deck invariants the engine relies on: at least `min_size`
/// cards, at most two cards per name, and same-named cards structurally
/// equal.
pub fn validate_deck(cards: &[Card], min_size: usize) -> Result<(), DeckError> {
    if cards.len() < min_size {
        return Err(DeckError::TooFewCards {
            len: cards.len(),
            required: min_size,
        });
    }

    let mut by_name: FxHashMap<&str, Vec<&Card>> = FxHashMap::default();
    for card in cards {
        by_name.entry(card.name()).or_default().push(card);
    }

    for (name, copies) in by_name {
        if copies.len() > 2 {
            return Err(DeckError::TooManyCopies {
                name: name.to_string(),
            });
        }
        if copies.len() == 2 && copies[0] != copies[1] {
            return Err(DeckError::MismatchedCopies {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}
