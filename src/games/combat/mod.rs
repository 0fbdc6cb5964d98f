//! Combat and Recursive Combat.
//!
//! Two players each hold a deck. Every round both draw their top card and the
//! round winner puts both cards on the bottom of their own deck, their own
//! card first. A player with no cards left loses.
//!
//! - **Combat**: the higher card wins the round.
//! - **Recursive Combat**: if both players hold at least as many cards as
//!   the value they drew, a sub-game on copies of that many cards decides the
//!   round. A game that returns to a state it has already seen ends at once
//!   with player 1 as the winner.
//!
//! The winner's score is their final deck weighted by position: the bottom
//! card counts once, the next twice, and so on.

mod engine;
mod game;
mod input;
mod rules;

pub use engine::{deal, play, play_recursive, solve, Answers, CombatEngine};
pub use game::Game;
pub use input::parse_decks;
pub use rules::{Combat, RecursiveCombat};
