//! Core engine types: cards, decks, players, state, configuration, RNG, errors.
//!
//! Everything here is rule-agnostic. The rule sets in `games::combat` are
//! built on top of these types.

pub mod card;
pub mod deck;
pub mod player;
pub mod state;
pub mod config;
pub mod record;
pub mod rng;
pub mod error;

pub use card::Card;
pub use deck::Deck;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use state::{GameState, SeenSet};
pub use config::{GameConfig, Variant};
pub use record::{RoundDecision, RoundRecord};
pub use rng::GameRng;
pub use error::{CombatError, Result};
