//! Error taxonomy for the rules engine.
//!
//! A single closed enum covers the four failure categories:
//!
//! - **Configuration**: bad dimensions, undersized decks, oversized hands,
//!   bad duplication; raised only by `start_game`.
//! - **Precondition**: a rule-level reason a placement is illegal. Each
//!   reason is a distinct variant so callers can react differently.
//! - **State**: operating before `start_game` or after the game ended.
//! - **Coordinate**: out-of-range row/column, a caller bug rather than a game
//!   rule violation, so it is kept apart from the precondition variants.
//!
//! Mutating operations never partially apply: an `Err` return means state
//! is exactly as it was before the call.

use thiserror::Error;

use super::player::PlayerColor;
use crate::cards::DeckError;

/// Everything that can go wrong when driving the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    // === Configuration ===
    /// Board dimensions must satisfy `rows > 0` and odd `cols > 1`.
    #[error("invalid board dimensions {rows}x{cols}: rows must be positive and columns odd and > 1")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A deck must hold at least `rows * cols` cards.
    #[error("{player} deck has {len} cards but a {rows}x{cols} board requires {required}")]
    DeckTooSmall {
        player: PlayerColor,
        len: usize,
        rows: usize,
        cols: usize,
        required: usize,
    },

    /// Hand size may not exceed a third of the deck size.
    #[error("hand size {hand_size} exceeds a third of the {deck_size}-card deck")]
    HandTooLarge { hand_size: usize, deck_size: usize },

    /// A deck may hold at most two cards sharing one name.
    #[error("{player} deck holds more than two copies of {name:?}")]
    TooManyCopies { player: PlayerColor, name: String },

    /// Two same-named cards in a deck must be structurally identical.
    #[error("{player} deck holds two different cards both named {name:?}")]
    MismatchedCopies { player: PlayerColor, name: String },

    /// A deck failed a validation not covered by a dedicated variant.
    #[error("{player} deck is invalid: {source}")]
    InvalidDeck {
        player: PlayerColor,
        #[source]
        source: DeckError,
    },

    /// `start_game` was called on a game that already started.
    #[error("game has already been started")]
    AlreadyStarted,

    // === Preconditions ===
    /// The hand index does not name a card.
    #[error("card index {index} is out of range for a hand of {hand_len}")]
    InvalidCardIndex { index: usize, hand_len: usize },

    /// The target cell holds no pawns.
    #[error("cell ({row}, {col}) does not hold pawns")]
    CellNotPawns { row: usize, col: usize },

    /// The target cell's pawns belong to the other player.
    #[error("pawns at ({row}, {col}) belong to {owner}, not to {acting}")]
    WrongPawnOwner {
        row: usize,
        col: usize,
        owner: PlayerColor,
        acting: PlayerColor,
    },

    /// The target cell has fewer pawns than the card costs.
    #[error("cell ({row}, {col}) holds {have} pawns but the card costs {need}")]
    InsufficientPawns {
        row: usize,
        col: usize,
        have: u8,
        need: u8,
    },

    /// `add_pawn` was used on pawns of the other player. Ownership changes
    /// go through `change_ownership`, never through `add_pawn`.
    #[error("cannot add a {acting} pawn onto pawns owned by {owner}")]
    OwnershipViolation {
        acting: PlayerColor,
        owner: PlayerColor,
    },

    /// A pawn cannot land on a cell occupied by a card.
    #[error("cell is occupied by a card and cannot take a pawn")]
    CellOccupiedByCard,

    /// `change_ownership` is only valid on a pawn-occupied cell.
    #[error("cannot change ownership of a cell that holds no pawns")]
    NotPawnOccupied,

    // === State ===
    /// Operation attempted before `start_game`.
    #[error("game has not been started")]
    NotStarted,

    /// Mutation attempted after the game ended.
    #[error("game is over")]
    GameOver,

    /// The winner was queried before the game ended.
    #[error("game is still in progress")]
    GameNotOver,

    // === Coordinates ===
    /// Row or column outside the board.
    #[error("({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl RulesError {
    /// True for the rule-level placement rejections: the reasons
    /// `is_legal_move` answers `false` for, as opposed to state or
    /// coordinate errors which indicate a caller bug.
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            RulesError::InvalidCardIndex { .. }
                | RulesError::CellNotPawns { .. }
                | RulesError::WrongPawnOwner { .. }
                | RulesError::InsufficientPawns { .. }
        )
    }
}
