//! Rules engine trait for Combat variants.
//!
//! Variants implement `RulesEngine` to define:
//! - How a round's winner is chosen
//! - Whether repeated states end the game
//!
//! The game loop in `games::combat` calls into `RulesEngine` but never
//! looks at variant-specific behavior directly.

pub mod engine;

pub use engine::{higher_card, GameResult, RoundContext, RulesEngine, Termination};
