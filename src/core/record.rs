//! Round history.
//!
//! A `RoundRecord` captures what happened in one round of the top-level
//! game: the cards drawn, who took them, and whether a sub-game decided it.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::player::{PlayerId, PlayerMap};

/// How a round was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundDecision {
    /// Higher card won.
    HigherCard,
    /// A recursive sub-game picked the winner.
    SubGame,
}

/// Record of one played round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number within the game (starts at 1).
    pub round: u32,
    /// Card each player drew.
    pub drawn: PlayerMap<Card>,
    /// Player who took both cards.
    pub winner: PlayerId,
    pub decision: RoundDecision,
}

impl RoundRecord {
    /// Card played by the round winner.
    #[must_use]
    pub fn winning_card(&self) -> Card {
        self.drawn[self.winner]
    }

    /// Check if the winner took the round with the lower card.
    #[must_use]
    pub fn is_upset(&self) -> bool {
        self.drawn[self.winner] < self.drawn[self.winner.opponent()]
    }
}
