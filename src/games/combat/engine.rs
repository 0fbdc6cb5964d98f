//! Engine entry points.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Deck, GameConfig, GameRng, GameState, PlayerId, Result, Variant};
use crate::rules::{GameResult, RulesEngine};

use super::game::Game;
use super::input::parse_decks;
use super::rules::{Combat, RecursiveCombat};

/// Plays games under a fixed configuration.
///
/// ## Example
///
/// ```
/// use rust_combat::core::{Deck, GameConfig, GameState, PlayerId};
/// use rust_combat::games::combat::CombatEngine;
///
/// let engine = CombatEngine::new(GameConfig::combat());
/// let state = GameState::new(
///     Deck::from_values([9, 2, 6, 3, 1]),
///     Deck::from_values([5, 8, 4, 7, 10]),
/// );
/// let result = engine.play(state).unwrap();
/// assert_eq!(result.winner, PlayerId::TWO);
/// assert_eq!(result.score, 306);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CombatEngine {
    config: GameConfig,
}

impl CombatEngine {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play a full game from `state` under the configured variant.
    pub fn play(&self, state: GameState) -> Result<GameResult> {
        match self.config.variant {
            Variant::Combat => self.run(&Combat, state),
            Variant::RecursiveCombat => self.run(&RecursiveCombat, state),
        }
    }

    fn run<R: RulesEngine>(&self, rules: &R, state: GameState) -> Result<GameResult> {
        let game = Game::new(rules, state);
        if self.config.record_history {
            game.with_history().play()
        } else {
            game.play()
        }
    }
}

/// Play plain Combat and return the winner's score.
pub fn play(deck1: Deck, deck2: Deck) -> Result<u64> {
    let result = CombatEngine::new(GameConfig::combat()).play(GameState::new(deck1, deck2))?;
    Ok(result.score)
}

/// Play Recursive Combat and return the winner and their score.
pub fn play_recursive(deck1: Deck, deck2: Deck) -> Result<(PlayerId, u64)> {
    let result =
        CombatEngine::new(GameConfig::recursive_combat()).play(GameState::new(deck1, deck2))?;
    Ok(result.outcome())
}

/// Scores for both variants on the same starting decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub combat: u64,
    pub recursive_combat: u64,
}

/// Parse puzzle input and play it under both variants.
pub fn solve(input: &str) -> Result<Answers> {
    let state = parse_decks(input)?;
    let (deck1, deck2) = state.decks.into_pair();
    let (_, recursive_combat) = play_recursive(deck1.clone(), deck2.clone())?;
    Ok(Answers {
        combat: play(deck1, deck2)?,
        recursive_combat,
    })
}

/// Deal a random, well-formed game.
///
/// Cards `1..=card_count` are shuffled and split in half; player 1 receives
/// the extra card when `card_count` is odd. The same seed always deals the
/// same game.
#[must_use]
pub fn deal(card_count: usize, seed: u64) -> GameState {
    let mut cards: Vec<Card> = (1..=card_count as u32).map(Card::new).collect();
    GameRng::new(seed).shuffle(&mut cards);

    let split = (card_count + 1) / 2;
    let two = cards.split_off(split);
    GameState::new(cards.into_iter().collect(), two.into_iter().collect())
}
