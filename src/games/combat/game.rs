//! Game runner shared by every Combat variant.

use log::{debug, trace};

use crate::core::{CombatError, GameState, PlayerId, Result, RoundRecord, SeenSet};
use crate::rules::{GameResult, RoundContext, RulesEngine, Termination};

/// One play-through of a Combat game.
///
/// A `Game` owns its decks, its round counter and its seen set. Sub-games
/// are separate `Game` values created by the rules, played to completion,
/// and dropped before the parent resumes.
pub struct Game<'r, R: RulesEngine + ?Sized> {
    rules: &'r R,
    state: GameState,
    seen: SeenSet,
    round: u32,
    depth: u32,
    history: Option<Vec<RoundRecord>>,
}

impl<'r, R: RulesEngine + ?Sized> Game<'r, R> {
    /// Create a top-level game.
    pub fn new(rules: &'r R, state: GameState) -> Self {
        Self::sub_game(rules, state, 0)
    }

    /// Create a game nested `depth` levels below the top-level game.
    pub fn sub_game(rules: &'r R, state: GameState, depth: u32) -> Self {
        Self {
            rules,
            state,
            seen: SeenSet::new(),
            round: 0,
            depth,
            history: None,
        }
    }

    /// Record every round this game plays into the result.
    #[must_use]
    pub fn with_history(mut self) -> Self {
        self.history = Some(Vec::new());
        self
    }

    /// Current decks.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Sub-game nesting depth (0 = top-level game).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Play one round, or detect that the game is already over.
    ///
    /// Returns the winner and the reason once the game has ended.
    pub fn step(&mut self) -> Result<Option<(PlayerId, Termination)>> {
        if let Some(winner) = self.state.last_standing() {
            return Ok(Some((winner, Termination::EmptyDeck)));
        }

        if self.rules.detects_repeats() && !self.seen.insert(&self.state) {
            debug!(
                "depth {}: repeated state after {} rounds, player 1 wins",
                self.depth, self.round
            );
            return Ok(Some((PlayerId::ONE, Termination::CycleDetected)));
        }

        let Some(drawn) = self.state.draw() else {
            return Err(CombatError::malformed(0, "both decks are empty"));
        };
        self.round += 1;

        let ctx = RoundContext {
            depth: self.depth,
            round: self.round,
        };
        let (winner, decision) = self.rules.round_winner(&self.state, &drawn, ctx)?;
        trace!(
            "depth {} round {}: {} vs {}, {} takes it ({:?})",
            self.depth,
            self.round,
            drawn[PlayerId::ONE],
            drawn[PlayerId::TWO],
            winner,
            decision,
        );

        self.state.award(winner, &drawn);
        if let Some(history) = &mut self.history {
            history.push(RoundRecord {
                round: self.round,
                drawn,
                winner,
                decision,
            });
        }

        Ok(None)
    }

    /// Play until one deck is empty or the repeat rule ends the game.
    pub fn play(mut self) -> Result<GameResult> {
        debug!(
            "depth {}: starting {:?} game, {} vs {} cards",
            self.depth,
            self.rules.variant(),
            self.state.deck(PlayerId::ONE).len(),
            self.state.deck(PlayerId::TWO).len(),
        );

        let (winner, termination) = loop {
            if let Some(end) = self.step()? {
                break end;
            }
        };

        let score = self.state.deck(winner).score();
        debug!(
            "depth {}: {} wins after {} rounds ({:?}), score {}",
            self.depth, winner, self.round, termination, score
        );

        Ok(GameResult {
            winner,
            score,
            termination,
            rounds: self.round,
            final_state: self.state,
            history: self.history.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, RoundDecision};
    use crate::games::combat::{Combat, RecursiveCombat};

    fn example() -> GameState {
        GameState::new(
            Deck::from_values([9, 2, 6, 3, 1]),
            Deck::from_values([5, 8, 4, 7, 10]),
        )
    }

    #[test]
    fn test_step_by_step() {
        let mut game = Game::new(&Combat, example());
        assert_eq!(game.step(), Ok(None));
        assert_eq!(game.round(), 1);
        assert_eq!(game.state().deck(PlayerId::ONE).to_values(), vec![2, 6, 3, 1, 9, 5]);
        assert_eq!(game.state().deck(PlayerId::TWO).to_values(), vec![8, 4, 7, 10]);
        assert_eq!(game.depth(), 0);
    }

    #[test]
    fn test_combat_example() {
        let result = Game::new(&Combat, example()).play().unwrap();
        assert_eq!(result.winner, PlayerId::TWO);
        assert_eq!(result.score, 306);
        assert_eq!(result.rounds, 29);
        assert_eq!(result.termination, Termination::EmptyDeck);
        assert!(result.history.is_empty());
    }

    #[test]
    fn test_recursive_example() {
        let result = Game::new(&RecursiveCombat, example()).play().unwrap();
        assert_eq!(result.outcome(), (PlayerId::TWO, 291));
        assert_eq!(
            result.final_state.deck(PlayerId::TWO).to_values(),
            vec![7, 5, 6, 2, 4, 1, 10, 8, 9, 3]
        );
    }

    #[test]
    fn test_history_only_when_requested() {
        let result = Game::new(&RecursiveCombat, example())
            .with_history()
            .play()
            .unwrap();
        assert_eq!(result.history.len(), result.rounds as usize);
        assert_eq!(result.history[0].round, 1);
        assert!(result
            .history
            .iter()
            .any(|record| record.decision == RoundDecision::SubGame));
    }

    #[test]
    fn test_already_finished() {
        let state = GameState::new(Deck::from_values([3]), Deck::new());
        let result = Game::new(&RecursiveCombat, state).play().unwrap();
        assert_eq!(result.outcome(), (PlayerId::ONE, 3));
        assert_eq!(result.rounds, 0);
    }

    #[test]
    fn test_both_empty_is_malformed() {
        let result = Game::new(&Combat, GameState::default()).play();
        assert!(matches!(result, Err(CombatError::MalformedInput { .. })));
    }
}
