//! The game state machine.
//!
//! Lifecycle: `NotStarted → InProgress → Over`. A game is created idle,
//! armed once by [`Game::start_game`], mutated only through
//! [`Game::place_card`] and [`Game::pass_turn`], and ends when two passes
//! occur consecutively.
//!
//! ## Contracts
//!
//! - **Validate-then-mutate**: a failed mutating call leaves state exactly
//!   as it was. No partial mutation is ever observable.
//! - **Exclusive ownership**: the engine owns all board and player state;
//!   external collaborators read through the observation methods and
//!   mutate only through the two operations above.
//! - **Snapshots**: [`Game::snapshot`] produces a fully independent deep
//!   copy (hands and decks are `im::Vector`, so the copy is cheap). The
//!   strategy layer leans on this for lookahead; snapshots carry no
//!   observers.

use im::Vector;
use log::{debug, warn};
use std::rc::Rc;

use super::apply::apply_influence;
use super::board::Board;
use super::cell::{Cell, CellContent};
use super::events::{GameObserver, ObserverId, ObserverRegistry};
use super::score;
use crate::cards::{validate_deck, Card, DeckError};
use crate::core::{PerPlayer, PlayerColor, RulesError};

/// One player's deck and hand. Both are insertion-ordered; the deck is
/// drawn from the front.
#[derive(Clone, Debug)]
struct PlayerState {
    deck: Vector<Card>,
    hand: Vector<Card>,
}

/// Everything that exists only once the game has started.
#[derive(Clone, Debug)]
struct Session {
    board: Board,
    players: PerPlayer<PlayerState>,
    current: PlayerColor,
    last_passed: bool,
    hand_cap: usize,
}

/// The rules engine: board, hands, decks, and turn state.
#[derive(Debug, Default)]
pub struct Game {
    session: Option<Session>,
    over: bool,
    observers: ObserverRegistry,
}

impl Game {
    /// A fresh, not-yet-started game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Lifecycle ===

    /// Start the game: validate configuration, deal hands, set up the
    /// initial pawns, and hand the first turn to Red.
    ///
    /// Decks are consumed in order; the first `hand_size` cards of each
    /// become the starting hands. Fails with a configuration error if the
    /// dimensions are invalid, a deck is too small or malformed, or the
    /// hand size exceeds a third of a deck.
    pub fn start_game(
        &mut self,
        rows: usize,
        cols: usize,
        red_deck: Vec<Card>,
        blue_deck: Vec<Card>,
        hand_size: usize,
    ) -> Result<(), RulesError> {
        if self.session.is_some() {
            return Err(RulesError::AlreadyStarted);
        }

        let board = Board::starting(rows, cols)?;
        let decks = PerPlayer::from_parts(red_deck, blue_deck);
        for (player, deck) in decks.iter() {
            check_deck(player, deck, rows, cols)?;
            if hand_size * 3 > deck.len() {
                return Err(RulesError::HandTooLarge {
                    hand_size,
                    deck_size: deck.len(),
                });
            }
        }

        let players = decks.map(|cards| {
            let mut deck: Vector<Card> = cards.iter().cloned().collect();
            let mut hand = Vector::new();
            for _ in 0..hand_size {
                if let Some(card) = deck.pop_front() {
                    hand.push_back(card);
                }
            }
            PlayerState { deck, hand }
        });

        debug!("game started: {rows}x{cols} board, hand size {hand_size}");
        self.session = Some(Session {
            board,
            players,
            current: PlayerColor::Red,
            last_passed: false,
            hand_cap: hand_size,
        });
        self.over = false;
        self.observers.notify_turn_changed(PlayerColor::Red);
        Ok(())
    }

    /// Place the current player's hand card `card_index` at `(row, col)`.
    ///
    /// On success the cell's pawns are replaced by the card, its influence
    /// is applied, the pass flag clears, and the turn advances (the new
    /// current player draws if below their hand cap). Any failure leaves
    /// state untouched, fires the `invalid_move` notification, and returns
    /// the typed error.
    pub fn place_card(
        &mut self,
        card_index: usize,
        row: usize,
        col: usize,
    ) -> Result<(), RulesError> {
        match self.try_place(card_index, row, col) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("rejected placement of card {card_index} at ({row}, {col}): {err}");
                self.observers.notify_invalid_move(&err.to_string());
                Err(err)
            }
        }
    }

    fn try_place(&mut self, card_index: usize, row: usize, col: usize) -> Result<(), RulesError> {
        if self.over {
            return Err(RulesError::GameOver);
        }
        let Some(session) = self.session.as_mut() else {
            return Err(RulesError::NotStarted);
        };

        let acting = session.current;
        let cell = session.board.cell(row, col)?;
        placement_check(&session.players[acting].hand, acting, card_index, cell, row, col)?;

        // All checks passed; nothing below can fail.
        let cell = session.board.cell_mut(row, col)?;
        let card = session.players[acting].hand.remove(card_index);
        cell.set_card(card.clone(), acting);
        apply_influence(&mut session.board, &card, row, col, acting);
        session.last_passed = false;

        debug!("{acting} placed {card} at ({row}, {col})");
        self.advance_turn();
        Ok(())
    }

    /// Pass the current player's turn.
    ///
    /// A second consecutive pass ends the game and fires `game_over`;
    /// otherwise the turn advances with the usual draw.
    pub fn pass_turn(&mut self) -> Result<(), RulesError> {
        if self.over {
            return Err(RulesError::GameOver);
        }
        let Some(session) = self.session.as_mut() else {
            return Err(RulesError::NotStarted);
        };

        if session.last_passed {
            let totals = score::total_scores(&session.board);
            let passer = session.current;
            self.over = true;

            let winner = winner_of(totals);
            debug!("{passer} passed consecutively; game over, winner: {winner:?}");
            self.observers.notify_game_over(winner, totals);
            Ok(())
        } else {
            session.last_passed = true;
            debug!("{} passed", session.current);
            self.advance_turn();
            Ok(())
        }
    }

    /// Switch the current player, draw for them if allowed, and notify.
    fn advance_turn(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.current = session.current.opponent();
        let current = session.current;

        let hand_cap = session.hand_cap;
        let player = &mut session.players[current];
        if player.hand.len() < hand_cap {
            if let Some(card) = player.deck.pop_front() {
                player.hand.push_back(card);
            }
        }

        self.observers.notify_turn_changed(current);
    }

    // === Legality ===

    /// Pure predicate form of the placement precondition check.
    ///
    /// Never mutates. Ordinary illegality (a bad hand index, a cell
    /// without pawns, wrong owner, too few pawns) answers `Ok(false)`.
    /// `Err` is reserved for caller bugs: out-of-range coordinates, or a
    /// game not in progress.
    pub fn is_legal_move(
        &self,
        card_index: usize,
        row: usize,
        col: usize,
    ) -> Result<bool, RulesError> {
        if self.over {
            return Err(RulesError::GameOver);
        }
        let session = self.session()?;

        let acting = session.current;
        let cell = session.board.cell(row, col)?;
        Ok(placement_check(&session.players[acting].hand, acting, card_index, cell, row, col).is_ok())
    }

    // === Observation ===

    /// Whether `start_game` has run.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the game reached its terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Result<PlayerColor, RulesError> {
        Ok(self.session()?.current)
    }

    /// Board dimensions as `(rows, cols)`.
    pub fn dimensions(&self) -> Result<(usize, usize), RulesError> {
        let session = self.session()?;
        Ok((session.board.rows(), session.board.cols()))
    }

    /// Read-only view of the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, RulesError> {
        self.session()?.board.cell(row, col)
    }

    /// A player's current hand, in insertion order.
    pub fn hand(&self, player: PlayerColor) -> Result<&Vector<Card>, RulesError> {
        Ok(&self.session()?.players[player].hand)
    }

    /// Cards remaining in a player's deck.
    pub fn deck_size(&self, player: PlayerColor) -> Result<usize, RulesError> {
        Ok(self.session()?.players[player].deck.len())
    }

    /// Both players' scores within one row.
    pub fn row_scores(&self, row: usize) -> Result<PerPlayer<u32>, RulesError> {
        score::row_scores(&self.session()?.board, row)
    }

    /// Both players' totals under the row-award rule.
    pub fn total_scores(&self) -> Result<PerPlayer<u32>, RulesError> {
        Ok(score::total_scores(&self.session()?.board))
    }

    /// Cells controlled by `player`, pawns and cards alike.
    pub fn owned_cell_count(&self, player: PlayerColor) -> Result<usize, RulesError> {
        Ok(self.session()?.board.owned_cell_count(player))
    }

    /// The winning player, or `None` for a tie. Only answerable once the
    /// game is over.
    pub fn winner(&self) -> Result<Option<PlayerColor>, RulesError> {
        let session = self.session()?;
        if !self.over {
            return Err(RulesError::GameNotOver);
        }
        Ok(winner_of(score::total_scores(&session.board)))
    }

    /// An independent deep copy of the whole game state, usable as a
    /// disposable sandbox. Mutations on either side are never observable
    /// on the other. Observers are not carried over.
    #[must_use]
    pub fn snapshot(&self) -> Game {
        Game {
            session: self.session.clone(),
            over: self.over,
            observers: ObserverRegistry::default(),
        }
    }

    // === Events ===

    /// Subscribe an observer to the three engine signals.
    pub fn subscribe(&mut self, observer: Rc<dyn GameObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Remove a previously subscribed observer. Returns false if the id
    /// was unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn session(&self) -> Result<&Session, RulesError> {
        self.session.as_ref().ok_or(RulesError::NotStarted)
    }
}

impl Clone for Game {
    fn clone(&self) -> Self {
        self.snapshot()
    }
}

/// The five placement preconditions, in reporting order.
fn placement_check(
    hand: &Vector<Card>,
    acting: PlayerColor,
    card_index: usize,
    cell: &Cell,
    row: usize,
    col: usize,
) -> Result<(), RulesError> {
    let Some(card) = hand.get(card_index) else {
        return Err(RulesError::InvalidCardIndex {
            index: card_index,
            hand_len: hand.len(),
        });
    };

    let CellContent::Pawns { owner, count } = *cell.content() else {
        return Err(RulesError::CellNotPawns { row, col });
    };
    if owner != acting {
        return Err(RulesError::WrongPawnOwner {
            row,
            col,
            owner,
            acting,
        });
    }
    if count < card.cost() {
        return Err(RulesError::InsufficientPawns {
            row,
            col,
            have: count,
            need: card.cost(),
        });
    }
    Ok(())
}

fn winner_of(totals: PerPlayer<u32>) -> Option<PlayerColor> {
    use std::cmp::Ordering;
    match totals[PlayerColor::Red].cmp(&totals[PlayerColor::Blue]) {
        Ordering::Greater => Some(PlayerColor::Red),
        Ordering::Less => Some(PlayerColor::Blue),
        Ordering::Equal => None,
    }
}

fn check_deck(
    player: PlayerColor,
    deck: &[Card],
    rows: usize,
    cols: usize,
) -> Result<(), RulesError> {
    match validate_deck(deck, rows * cols) {
        Ok(()) => Ok(()),
        Err(DeckError::TooFewCards { len, required }) => Err(RulesError::DeckTooSmall {
            player,
            len,
            rows,
            cols,
            required,
        }),
        Err(DeckError::TooManyCopies { name }) => Err(RulesError::TooManyCopies { player, name }),
        Err(DeckError::MismatchedCopies { name }) => {
            Err(RulesError::MismatchedCopies { player, name })
        }
        // validate_deck only raises the three variants above today; any
        // future validation surfaces with its own message instead of being
        // mislabeled.
        Err(source) => Err(RulesError::InvalidDeck { player, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::InfluenceGrid;

    fn plain(name: &str) -> Card {
        Card::new(name, 1, 2, InfluenceGrid::empty()).unwrap()
    }

    #[test]
    fn test_check_deck_maps_each_validation_failure() {
        let short: Vec<Card> = (0..3).map(|i| plain(&format!("Card{i}"))).collect();
        assert!(matches!(
            check_deck(PlayerColor::Red, &short, 2, 3),
            Err(RulesError::DeckTooSmall {
                player: PlayerColor::Red,
                len: 3,
                required: 6,
                ..
            })
        ));

        let triple = vec![plain("Twin"), plain("Twin"), plain("Twin")];
        assert!(matches!(
            check_deck(PlayerColor::Blue, &triple, 1, 3),
            Err(RulesError::TooManyCopies { player: PlayerColor::Blue, ref name }) if name == "Twin"
        ));

        let mismatched = vec![
            plain("Twin"),
            Card::new("Twin", 1, 9, InfluenceGrid::empty()).unwrap(),
            plain("Other"),
        ];
        assert!(matches!(
            check_deck(PlayerColor::Red, &mismatched, 1, 3),
            Err(RulesError::MismatchedCopies { ref name, .. }) if name == "Twin"
        ));
    }
}
