//! Player identification and per-player data storage.
//!
//! ## PlayerColor
//!
//! The game is strictly two-player. `Red` starts on column 0 of the board
//! and always moves first; `Blue` starts on the last column.
//!
//! ## PerPlayer
//!
//! Two-slot per-player storage with O(1) access, indexable by `PlayerColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    /// Owns column 0 at game start; moves first.
    Red,
    /// Owns the last column at game start.
    Blue,
}

impl PlayerColor {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }

    /// Both colors, Red first.
    #[must_use]
    pub const fn both() -> [PlayerColor; 2] {
        [PlayerColor::Red, PlayerColor::Blue]
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "Red"),
            PlayerColor::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-player data storage.
///
/// One slot per color, indexed by `PlayerColor`.
///
/// ## Example
///
/// ```
/// use pawnfall::core::{PerPlayer, PlayerColor};
///
/// let mut scores: PerPlayer<u32> = PerPlayer::with_value(0);
/// scores[PlayerColor::Red] = 12;
///
/// assert_eq!(scores[PlayerColor::Red], 12);
/// assert_eq!(scores[PlayerColor::Blue], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    red: T,
    blue: T,
}

impl<T> PerPlayer<T> {
    /// Create from a factory function receiving each color.
    pub fn new(factory: impl Fn(PlayerColor) -> T) -> Self {
        Self {
            red: factory(PlayerColor::Red),
            blue: factory(PlayerColor::Blue),
        }
    }

    /// Create with both slots set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            red: value.clone(),
            blue: value,
        }
    }

    /// Create from explicit red and blue values.
    #[must_use]
    pub fn from_parts(red: T, blue: T) -> Self {
        Self { red, blue }
    }

    /// Get a reference to a player's slot.
    #[must_use]
    pub fn get(&self, player: PlayerColor) -> &T {
        match player {
            PlayerColor::Red => &self.red,
            PlayerColor::Blue => &self.blue,
        }
    }

    /// Get a mutable reference to a player's slot.
    pub fn get_mut(&mut self, player: PlayerColor) -> &mut T {
        match player {
            PlayerColor::Red => &mut self.red,
            PlayerColor::Blue => &mut self.blue,
        }
    }

    /// Iterate over `(PlayerColor, &T)` pairs, Red first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        [(PlayerColor::Red, &self.red), (PlayerColor::Blue, &self.blue)].into_iter()
    }

    /// Apply a function to both slots, producing a new `PerPlayer`.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PerPlayer<U> {
        PerPlayer {
            red: f(&self.red),
            blue: f(&self.blue),
        }
    }
}

impl<T> Index<PlayerColor> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: PlayerColor) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerColor> for PerPlayer<T> {
    fn index_mut(&mut self, player: PlayerColor) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerColor::Red.opponent(), PlayerColor::Blue);
        assert_eq!(PlayerColor::Blue.opponent(), PlayerColor::Red);
        assert_eq!(format!("{}", PlayerColor::Red), "Red");
    }

    #[test]
    fn test_per_player_new() {
        let map = PerPlayer::new(|p| match p {
            PlayerColor::Red => 1,
            PlayerColor::Blue => 2,
        });

        assert_eq!(map[PlayerColor::Red], 1);
        assert_eq!(map[PlayerColor::Blue], 2);
    }

    #[test]
    fn test_per_player_mutation() {
        let mut map: PerPlayer<i32> = PerPlayer::with_value(0);

        map[PlayerColor::Red] = 10;
        map[PlayerColor::Blue] = 20;

        assert_eq!(map[PlayerColor::Red], 10);
        assert_eq!(map[PlayerColor::Blue], 20);
    }

    #[test]
    fn test_per_player_iter() {
        let map = PerPlayer::from_parts('r', 'b');

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerColor::Red, &'r'), (PlayerColor::Blue, &'b')]);
    }

    #[test]
    fn test_per_player_map() {
        let map = PerPlayer::from_parts(3, 4);
        let doubled = map.map(|v| v * 2);

        assert_eq!(doubled[PlayerColor::Red], 6);
        assert_eq!(doubled[PlayerColor::Blue], 8);
    }

    #[test]
    fn test_per_player_serialization() {
        let map = PerPlayer::from_parts(1u32, 2u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PerPlayer<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
