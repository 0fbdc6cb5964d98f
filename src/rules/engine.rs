//! Rules engine trait for Combat variants.
//!
//! The game loop (draw, award, score) is shared by every variant. A
//! `RulesEngine` only decides:
//! - Whether a repeated state ends the game
//! - Who wins a round once both cards are drawn

use serde::{Deserialize, Serialize};

use crate::core::card::Card;
use crate::core::config::Variant;
use crate::core::error::{CombatError, Result};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::record::{RoundDecision, RoundRecord};
use crate::core::state::GameState;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// One player ran out of cards.
    EmptyDeck,
    /// A round started in a state this game had already seen.
    CycleDetected,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    /// Score of the winner's deck at the end of the game.
    pub score: u64,
    pub termination: Termination,
    /// Rounds played (a round cut short by the repeat rule is not counted).
    pub rounds: u32,
    /// Both decks when the game ended.
    pub final_state: GameState,
    /// Top-level rounds, if history recording was enabled.
    pub history: Vec<RoundRecord>,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// Winner number and score, as reported for Recursive Combat.
    #[must_use]
    pub fn outcome(&self) -> (PlayerId, u64) {
        (self.winner, self.score)
    }
}

/// Position of a round within the game tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundContext {
    /// Sub-game nesting depth (0 = top-level game).
    pub depth: u32,
    /// Round number within the current game (starts at 1).
    pub round: u32,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `round_winner` sees the state *after* both cards were drawn
/// - Implementations must be deterministic and must not keep state
///   between calls; every game owns its own seen set
pub trait RulesEngine {
    /// Which variant these rules implement.
    fn variant(&self) -> Variant;

    /// Whether a repeated state ends the game in player 1's favor.
    fn detects_repeats(&self) -> bool;

    /// Decide who takes the two drawn cards.
    fn round_winner(
        &self,
        state: &GameState,
        drawn: &PlayerMap<Card>,
        ctx: RoundContext,
    ) -> Result<(PlayerId, RoundDecision)>;
}

/// The player who drew the strictly higher card.
///
/// Equal cards have no winner under any rule set and fail with
/// `InvalidState`.
pub fn higher_card(drawn: &PlayerMap<Card>, ctx: RoundContext) -> Result<PlayerId> {
    let (one, two) = (drawn[PlayerId::ONE], drawn[PlayerId::TWO]);
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => Ok(PlayerId::ONE),
        std::cmp::Ordering::Less => Ok(PlayerId::TWO),
        std::cmp::Ordering::Equal => Err(CombatError::InvalidState {
            depth: ctx.depth,
            round: ctx.round,
            card: one,
        }),
    }
}
