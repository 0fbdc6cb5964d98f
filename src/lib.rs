//! # rust-combat
//!
//! An engine for the two-player card game Combat and its recursive variant.
//!
//! ## Design Principles
//!
//! 1. **One Loop, Pluggable Rules**: drawing, awarding and scoring are shared.
//!    Variants only decide round winners via `RulesEngine`.
//!
//! 2. **Owned Game State**: every game, including each sub-game, owns its
//!    decks and its seen-state set. Nothing is global, so independent games
//!    never influence each other.
//!
//! 3. **Fail Loudly**: malformed input and impossible rounds (two equal
//!    cards) are errors, never guesses.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: decks are `im::Vector`s, so sub-game
//!   copies and seen-state snapshots are O(1) clones.
//!
//! - **Recursion**: sub-games are ordinary nested calls. The parent waits
//!   until the child game is decided.
//!
//! ## Modules
//!
//! - `core`: Cards, decks, players, state, configuration, RNG, errors
//! - `rules`: RulesEngine trait and game results
//! - `games`: Combat and Recursive Combat, input parsing, entry points

pub mod core;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, Deck, PlayerId, PlayerMap,
    GameState, SeenSet,
    GameConfig, Variant,
    RoundDecision, RoundRecord,
    GameRng,
    CombatError, Result,
};

pub use crate::rules::{GameResult, RoundContext, RulesEngine, Termination};

pub use crate::games::combat::{
    deal, parse_decks, play, play_recursive, solve,
    Answers, Combat, CombatEngine, Game, RecursiveCombat,
};
