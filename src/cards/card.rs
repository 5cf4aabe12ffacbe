//! The card value type.
//!
//! Cards are immutable: a name, a pawn cost, a printed score value, and an
//! influence grid. Equality and hashing are structural over all four,
//! which matters because decks may carry two identical cards and the
//! strategy layer compares cards by value when simulating.

use serde::{Deserialize, Serialize};

use super::deck::DeckError;
use super::influence::InfluenceGrid;

/// Highest legal pawn cost.
pub const MAX_COST: u8 = 3;

/// An immutable game card.
///
/// ## Example
///
/// ```
/// use pawnfall::cards::{Card, InfluenceGrid};
///
/// let card = Card::new("Lancer", 1, 2, InfluenceGrid::empty()).unwrap();
/// assert_eq!(card.cost(), 1);
/// assert_eq!(card.value(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: String,
    cost: u8,
    value: u32,
    influence: InfluenceGrid,
}

impl Card {
    /// Create a card, validating its invariants: non-empty name,
    /// cost in `1..=3`, value at least 1.
    pub fn new(
        name: impl Into<String>,
        cost: u8,
        value: u32,
        influence: InfluenceGrid,
    ) -> Result<Self, DeckError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DeckError::EmptyName);
        }
        if cost == 0 || cost > MAX_COST {
            return Err(DeckError::BadCost { name, cost });
        }
        if value == 0 {
            return Err(DeckError::BadValue { name, value });
        }

        Ok(Self {
            name,
            cost,
            value,
            influence,
        })
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pawn cost, `1..=3`.
    #[must_use]
    pub fn cost(&self) -> u8 {
        self.cost
    }

    /// Printed score value, at least 1.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The influence pattern, centered on the placement cell.
    #[must_use]
    pub fn influence(&self) -> &InfluenceGrid {
        &self.influence
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (cost {}, value {})", self.name, self.cost, self.value)
    }
}
