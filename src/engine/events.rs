//! The event-notification boundary.
//!
//! External collaborators (views, controllers) subscribe a
//! [`GameObserver`] and receive three signals, fired synchronously at the
//! point of state transition:
//!
//! - `turn_changed`: a new current player, including at game start
//! - `game_over`: winner (or tie) with both final scores
//! - `invalid_move`: a rejected `place_card`, with the rendered reason
//!
//! Observers receive data only, never a handle back into the engine, so
//! they cannot mutate game state from inside a callback. Snapshots carry
//! no observers; simulated games are silent.

use std::rc::Rc;

use crate::core::{PerPlayer, PlayerColor};

/// Callbacks for the three engine signals.
///
/// All methods default to no-ops so observers implement only what they
/// care about. Observers needing mutable state use interior mutability.
pub trait GameObserver {
    /// A new player became current.
    fn turn_changed(&self, _new_player: PlayerColor) {}

    /// The game ended. `winner` is `None` on a tie.
    fn game_over(&self, _winner: Option<PlayerColor>, _final_scores: PerPlayer<u32>) {}

    /// A placement was rejected; `reason` is human-readable.
    fn invalid_move(&self, _reason: &str) {}
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Engine-side observer bookkeeping.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(ObserverId, Rc<dyn GameObserver>)>,
}

impl ObserverRegistry {
    pub(crate) fn subscribe(&mut self, observer: Rc<dyn GameObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns true if the id was subscribed.
    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub(crate) fn notify_turn_changed(&self, new_player: PlayerColor) {
        for (_, observer) in &self.observers {
            observer.turn_changed(new_player);
        }
    }

    pub(crate) fn notify_game_over(
        &self,
        winner: Option<PlayerColor>,
        final_scores: PerPlayer<u32>,
    ) {
        for (_, observer) in &self.observers {
            observer.game_over(winner, final_scores);
        }
    }

    pub(crate) fn notify_invalid_move(&self, reason: &str) {
        for (_, observer) in &self.observers {
            observer.invalid_move(reason);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
