//! Cards: the immutable card value type, influence grids, deck parsing.
//!
//! ## Key Types
//!
//! - `Influence` / `InfluenceGrid`: the closed symbol set and the 5×5
//!   pattern every card projects around its placement cell
//! - `Card`: immutable name / cost / value / influence, with structural
//!   equality
//! - `parse_deck` / `validate_deck`: the textual deck boundary

pub mod card;
pub mod deck;
pub mod influence;

pub use card::{Card, MAX_COST};
pub use deck::{parse_deck, validate_deck, DeckError};
pub use influence::{Influence, InfluenceGrid, GRID_CENTER, GRID_SIZE};
