//! Game state and seen-state tracking.
//!
//! - `GameState`: both players' decks at the start of a round
//! - `SeenSet`: every state a single game has started a round in
//!
//! Snapshots are full `GameState` values. Equality compares the exact
//! ordered contents of both decks, so two states holding the same cards in a
//! different order never collide.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::deck::Deck;
use super::player::{PlayerId, PlayerMap};

/// Both players' decks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub decks: PlayerMap<Deck>,
}

impl GameState {
    /// Create a state from player 1's and player 2's decks.
    #[must_use]
    pub fn new(deck1: Deck, deck2: Deck) -> Self {
        Self {
            decks: PlayerMap::from_pair(deck1, deck2),
        }
    }

    /// Get a player's deck.
    #[must_use]
    pub fn deck(&self, player: PlayerId) -> &Deck {
        &self.decks[player]
    }

    /// Total cards held by both players. Constant across a game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.decks.iter().map(|(_, deck)| deck.len()).sum()
    }

    /// The player still holding cards once the other has run out.
    ///
    /// Returns `None` while both players can still draw.
    #[must_use]
    pub fn last_standing(&self) -> Option<PlayerId> {
        match (self.decks[PlayerId::ONE].is_empty(), self.decks[PlayerId::TWO].is_empty()) {
            (false, true) => Some(PlayerId::ONE),
            (true, false) => Some(PlayerId::TWO),
            _ => None,
        }
    }

    /// Draw the front card from both decks.
    ///
    /// Returns `None`, leaving both decks untouched, if either deck is empty.
    pub fn draw(&mut self) -> Option<PlayerMap<Card>> {
        let one = self.decks[PlayerId::ONE].top()?;
        let two = self.decks[PlayerId::TWO].top()?;
        self.decks[PlayerId::ONE].draw();
        self.decks[PlayerId::TWO].draw();
        Some(PlayerMap::from_pair(one, two))
    }

    /// Give both drawn cards to the round winner: their own card first.
    pub fn award(&mut self, winner: PlayerId, drawn: &PlayerMap<Card>) {
        let deck = &mut self.decks[winner];
        deck.push_bottom(drawn[winner]);
        deck.push_bottom(drawn[winner.opponent()]);
    }

    /// Starting state for a sub-game, if both players hold at least as many
    /// cards as the value they just drew.
    ///
    /// The sub-game decks are copies of the top `drawn` cards of each deck.
    #[must_use]
    pub fn sub_game(&self, drawn: &PlayerMap<Card>) -> Option<GameState> {
        let one = self.decks[PlayerId::ONE].take_top(drawn[PlayerId::ONE].as_count())?;
        let two = self.decks[PlayerId::TWO].take_top(drawn[PlayerId::TWO].as_count())?;
        Some(GameState::new(one, two))
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (player, deck) in self.decks.iter() {
            writeln!(f, "{}'s deck: {}", player, deck)?;
        }
        Ok(())
    }
}

/// States a single game has already started a round in.
///
/// Owned by exactly one game and dropped with it.
#[derive(Clone, Debug, Default)]
pub struct SeenSet {
    states: FxHashSet<GameState>,
}

impl SeenSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state. Returns `false` if it had already been seen.
    pub fn insert(&mut self, state: &GameState) -> bool {
        self.states.insert(state.clone())
    }

    /// Check whether a state has been recorded.
    #[must_use]
    pub fn contains(&self, state: &GameState) -> bool {
        self.states.contains(state)
    }

    /// Number of distinct states recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
