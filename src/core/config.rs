//! Game configuration.
//!
//! Which rule set to play and whether to keep a round-by-round history
//! of the top-level game.

use serde::{Deserialize, Serialize};

/// Rule set selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Higher card takes the round. No sub-games, no repeat rule.
    Combat,
    /// Sub-games decide rounds when both decks are deep enough, and a
    /// repeated state ends the game in player 1's favor.
    #[default]
    RecursiveCombat,
}

/// Engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule set to play.
    pub variant: Variant,

    /// Record every round of the top-level game in the result.
    /// Sub-game rounds are never recorded.
    pub record_history: bool,
}

impl GameConfig {
    /// Config for plain Combat.
    #[must_use]
    pub fn combat() -> Self {
        Self::default().with_variant(Variant::Combat)
    }

    /// Config for Recursive Combat.
    #[must_use]
    pub fn recursive_combat() -> Self {
        Self::default().with_variant(Variant::RecursiveCombat)
    }

    /// Create a new config with the given rule set.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Create a new config that records round history.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}
