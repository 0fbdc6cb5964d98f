//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameConfig, GameState, PlayerId, Variant};
use crate::games::combat::{self, CombatEngine};

/// Play plain Combat on puzzle input and return the winner's score.
#[pyfunction(name = "play")]
pub fn py_play(input: &str) -> PyResult<u64> {
    let (deck1, deck2) = combat::parse_decks(input)?.decks.into_pair();
    Ok(combat::play(deck1, deck2)?)
}

/// Play Recursive Combat on puzzle input.
///
/// Returns `(winner, score)` with the winner numbered 1 or 2.
#[pyfunction(name = "play_recursive")]
pub fn py_play_recursive(input: &str) -> PyResult<(u8, u64)> {
    let (deck1, deck2) = combat::parse_decks(input)?.decks.into_pair();
    let (winner, score) = combat::play_recursive(deck1, deck2)?;
    Ok((winner.number(), score))
}

/// Scores for plain and Recursive Combat on puzzle input.
#[pyfunction(name = "solve")]
pub fn py_solve(input: &str) -> PyResult<(u64, u64)> {
    let answers = combat::solve(input)?;
    Ok((answers.combat, answers.recursive_combat))
}

fn engine_for(recursive: bool) -> CombatEngine {
    let variant = if recursive {
        Variant::RecursiveCombat
    } else {
        Variant::Combat
    };
    CombatEngine::new(GameConfig::default().with_variant(variant))
}

/// Python wrapper for a configured Combat game.
#[pyclass(name = "CombatGame")]
pub struct PyCombatGame {
    engine: CombatEngine,
    state: GameState,
}

#[pymethods]
impl PyCombatGame {
    /// Create a game from puzzle input.
    ///
    /// # Arguments
    /// - input: Text with `Player 1:` and `Player 2:` sections
    /// - recursive: Play Recursive Combat instead of plain Combat
    #[new]
    #[pyo3(signature = (input, recursive = true))]
    fn new(input: &str, recursive: bool) -> PyResult<Self> {
        Ok(Self {
            engine: engine_for(recursive),
            state: combat::parse_decks(input)?,
        })
    }

    /// Create a random game with cards `1..=card_count`.
    #[staticmethod]
    #[pyo3(signature = (card_count, seed = 42, recursive = true))]
    fn dealt(card_count: usize, seed: u64, recursive: bool) -> Self {
        Self {
            engine: engine_for(recursive),
            state: combat::deal(card_count, seed),
        }
    }

    /// Starting decks, player 1 first.
    fn decks(&self) -> (Vec<u32>, Vec<u32>) {
        (
            self.state.deck(PlayerId::ONE).to_values(),
            self.state.deck(PlayerId::TWO).to_values(),
        )
    }

    /// Play the game from its starting decks.
    ///
    /// Returns `(winner, score)`. The starting decks are left untouched, so
    /// calling this again gives the same answer.
    fn play(&self) -> PyResult<(u8, u64)> {
        let result = self.engine.play(self.state.clone())?;
        Ok((result.winner.number(), result.score))
    }

    fn __repr__(&self) -> String {
        format!(
            "CombatGame({:?}, {} vs {} cards)",
            self.engine.config().variant,
            self.state.deck(PlayerId::ONE).len(),
            self.state.deck(PlayerId::TWO).len(),
        )
    }
}
