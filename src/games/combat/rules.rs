//! Combat and Recursive Combat rule sets.

use log::trace;

use crate::core::{Card, GameState, PlayerId, PlayerMap, Result, RoundDecision, Variant};
use crate::rules::{higher_card, RoundContext, RulesEngine};

use super::game::Game;

/// Plain Combat: the higher card takes the round.
#[derive(Clone, Copy, Debug, Default)]
pub struct Combat;

impl RulesEngine for Combat {
    fn variant(&self) -> Variant {
        Variant::Combat
    }

    fn detects_repeats(&self) -> bool {
        false
    }

    fn round_winner(
        &self,
        _state: &GameState,
        drawn: &PlayerMap<Card>,
        ctx: RoundContext,
    ) -> Result<(PlayerId, RoundDecision)> {
        Ok((higher_card(drawn, ctx)?, RoundDecision::HigherCard))
    }
}

/// Recursive Combat.
///
/// If both players have at least as many cards left as the value they just
/// drew, the round goes to the winner of a fresh sub-game played on copies
/// of that many cards from the top of each deck. Otherwise the higher card
/// wins. A repeated state ends the game with player 1 as the winner.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveCombat;

impl RulesEngine for RecursiveCombat {
    fn variant(&self) -> Variant {
        Variant::RecursiveCombat
    }

    fn detects_repeats(&self) -> bool {
        true
    }

    fn round_winner(
        &self,
        state: &GameState,
        drawn: &PlayerMap<Card>,
        ctx: RoundContext,
    ) -> Result<(PlayerId, RoundDecision)> {
        match state.sub_game(drawn) {
            Some(sub_state) => {
                trace!(
                    "depth {} round {}: playing a sub-game ({} vs {} cards)",
                    ctx.depth,
                    ctx.round,
                    sub_state.deck(PlayerId::ONE).len(),
                    sub_state.deck(PlayerId::TWO).len(),
                );
                let result = Game::sub_game(self, sub_state, ctx.depth + 1).play()?;
                Ok((result.winner, RoundDecision::SubGame))
            }
            None => Ok((higher_card(drawn, ctx)?, RoundDecision::HigherCard)),
        }
    }
}
