//! A single board cell.
//!
//! A cell is a small state machine over `{Empty, Pawns, Card}` plus a
//! persistent value modifier. The modifier is part of every cell rather
//! than a special augmented-cell subtype: upgrading and devaluing
//! influence adjust it regardless of content, and it affects whichever
//! card eventually occupies the cell. It survives `set_card` and is only
//! reset when devaluation destroys a card.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlayerColor, RulesError};

/// Most pawns a single cell can hold.
pub const MAX_PAWNS: u8 = 3;

/// What currently occupies a cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    /// Nothing here.
    #[default]
    Empty,
    /// 1..=3 pawns, all owned by one player.
    Pawns { owner: PlayerColor, count: u8 },
    /// A placed card.
    Card { owner: PlayerColor, card: Card },
}

/// One grid position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    content: CellContent,
    value_modifier: i32,
}

impl Cell {
    /// An empty cell with no accumulated modifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content.
    #[must_use]
    pub fn content(&self) -> &CellContent {
        &self.content
    }

    /// The player controlling this cell, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerColor> {
        match self.content {
            CellContent::Empty => None,
            CellContent::Pawns { owner, .. } | CellContent::Card { owner, .. } => Some(owner),
        }
    }

    /// Number of pawns here; 0 unless the cell holds pawns.
    #[must_use]
    pub fn pawn_count(&self) -> u8 {
        match self.content {
            CellContent::Pawns { count, .. } => count,
            _ => 0,
        }
    }

    /// The placed card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match &self.content {
            CellContent::Card { card, .. } => Some(card),
            _ => None,
        }
    }

    /// The accumulated persistent value modifier.
    #[must_use]
    pub fn value_modifier(&self) -> i32 {
        self.value_modifier
    }

    /// True when nothing occupies the cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }

    /// Add one pawn for `owner`.
    ///
    /// Empty cells become a one-pawn stack. A friendly stack below the cap
    /// grows by one; at the cap this is a no-op. Adding onto an opposing
    /// stack is a contract violation (flips go through
    /// [`Cell::change_ownership`]), and cards block pawns entirely.
    pub fn add_pawn(&mut self, owner: PlayerColor) -> Result<(), RulesError> {
        match &mut self.content {
            CellContent::Empty => {
                self.content = CellContent::Pawns { owner, count: 1 };
                Ok(())
            }
            CellContent::Pawns {
                owner: existing,
                count,
            } => {
                if *existing != owner {
                    return Err(RulesError::OwnershipViolation {
                        acting: owner,
                        owner: *existing,
                    });
                }
                if *count < MAX_PAWNS {
                    *count += 1;
                }
                Ok(())
            }
            CellContent::Card { .. } => Err(RulesError::CellOccupiedByCard),
        }
    }

    /// Hand the cell's pawns to `new_owner`, keeping the count.
    ///
    /// Only valid while the cell holds pawns.
    pub fn change_ownership(&mut self, new_owner: PlayerColor) -> Result<(), RulesError> {
        match &mut self.content {
            CellContent::Pawns { owner, .. } => {
                *owner = new_owner;
                Ok(())
            }
            _ => Err(RulesError::NotPawnOccupied),
        }
    }

    /// Place a card for `owner`, replacing whatever was here.
    ///
    /// The value modifier is deliberately kept: accumulated influence is
    /// meant to affect whichever card lands on the cell.
    pub fn set_card(&mut self, card: Card, owner: PlayerColor) {
        self.content = CellContent::Card { owner, card };
    }

    /// The card's printed value plus the cell modifier, floored at 0 and
    /// saturating at `u32::MAX`.
    ///
    /// `None` when no card is present.
    #[must_use]
    pub fn effective_value(&self) -> Option<u32> {
        match &self.content {
            CellContent::Card { card, .. } => {
                let effective = i64::from(card.value()) + i64::from(self.value_modifier);
                Some(u32::try_from(effective.max(0)).unwrap_or(u32::MAX))
            }
            _ => None,
        }
    }

    /// Apply upgrading influence: raise the modifier by one.
    ///
    /// Unconditional for any content.
    pub fn upgrade(&mut self) {
        self.value_modifier += 1;
    }

    /// Apply devaluing influence: lower the modifier by one.
    ///
    /// Unconditional for any content. If a card's effective value drops to
    /// 0 it is destroyed: the cell reverts to `min(cost, 3)` pawns for the
    /// card's owner and the modifier resets to 0.
    pub fn devalue(&mut self) {
        self.value_modifier -= 1;

        if let CellContent::Card { owner, card } = &self.content {
            if self.effective_value() == Some(0) {
                let owner = *owner;
                let count = card.cost().min(MAX_PAWNS);
                self.content = CellContent::Pawns { owner, count };
                self.value_modifier = 0;
            }
        }
    }

    /// Apply regular influence for `acting`: add, grow, or flip.
    ///
    /// Empty gains one acting-player pawn, a friendly stack grows (capped),
    /// an opposing stack flips ownership with its count intact, and a card
    /// is unaffected.
    pub(crate) fn apply_regular(&mut self, acting: PlayerColor) {
        match &mut self.content {
            CellContent::Empty => {
                self.content = CellContent::Pawns {
                    owner: acting,
                    count: 1,
                };
            }
            CellContent::Pawns { owner, count } => {
                if *owner == acting {
                    if *count < MAX_PAWNS {
                        *count += 1;
                    }
                } else {
                    *owner = acting;
                }
            }
            CellContent::Card { .. } => {}
        }
    }
}
