//! Plain Combat tests.
//!
//! These tests drive the public API end to end: parse puzzle text, play
//! plain Combat, and check scores and round-by-round behavior.

use rust_combat::core::{Deck, GameConfig, GameState, PlayerId, RoundDecision};
use rust_combat::games::combat::{parse_decks, play, Combat, CombatEngine, Game};
use rust_combat::rules::Termination;
use rust_combat::CombatError;

const EXAMPLE: &str = "\
Player 1:
9
2
6
3
1

Player 2:
5
8
4
7
10
";

fn decks(one: &[u32], two: &[u32]) -> (Deck, Deck) {
    (
        Deck::from_values(one.iter().copied()),
        Deck::from_values(two.iter().copied()),
    )
}

/// The worked example scores 306.
#[test]
fn test_example_score() {
    let (deck1, deck2) = parse_decks(EXAMPLE).unwrap().decks.into_pair();
    assert_eq!(play(deck1, deck2), Ok(306));
}

/// The winner's final deck matches the worked example.
#[test]
fn test_example_final_deck() {
    let engine = CombatEngine::new(GameConfig::combat());
    let result = engine.play(parse_decks(EXAMPLE).unwrap()).unwrap();

    assert_eq!(result.winner, PlayerId::TWO);
    assert_eq!(result.termination, Termination::EmptyDeck);
    assert!(result.final_state.deck(PlayerId::ONE).is_empty());
    assert_eq!(
        result.final_state.deck(PlayerId::TWO).to_values(),
        vec![3, 2, 10, 6, 8, 5, 9, 4, 7, 1]
    );
}

/// Every round is decided by the higher card and recorded in order.
#[test]
fn test_history_records_every_round() {
    let engine = CombatEngine::new(GameConfig::combat().with_history(true));
    let result = engine.play(parse_decks(EXAMPLE).unwrap()).unwrap();

    assert_eq!(result.history.len(), 29);
    for (i, record) in result.history.iter().enumerate() {
        assert_eq!(record.round, i as u32 + 1);
        assert_eq!(record.decision, RoundDecision::HigherCard);
        assert!(!record.is_upset());
    }

    let first = &result.history[0];
    assert_eq!(first.winner, PlayerId::ONE);
    assert_eq!(first.winning_card().value(), 9);
}

/// Total cards stay constant round after round.
#[test]
fn test_card_count_conserved() {
    let mut game = Game::new(&Combat, parse_decks(EXAMPLE).unwrap());
    let total = game.state().total_cards();

    while game.step().unwrap().is_none() {
        assert_eq!(game.state().total_cards(), total);
    }
    assert_eq!(game.round(), 29);
}

/// Plain Combat has no repeat rule: this pair comes back to its starting
/// state after six rounds and would keep going.
#[test]
fn test_no_repeat_rule() {
    let (deck1, deck2) = decks(&[43, 19], &[2, 29, 14]);
    let start = GameState::new(deck1, deck2);
    let mut game = Game::new(&Combat, start.clone());

    for _ in 0..6 {
        assert_eq!(game.step(), Ok(None));
    }
    assert_eq!(game.state(), &start);

    for _ in 0..60 {
        assert_eq!(game.step(), Ok(None));
    }
}

/// Equal top cards cannot be resolved.
#[test]
fn test_equal_cards_fail() {
    let (deck1, deck2) = decks(&[5], &[5]);
    assert!(matches!(
        play(deck1, deck2),
        Err(CombatError::InvalidState { depth: 0, round: 1, .. })
    ));

    // Tie surfaces only when it is reached.
    let (deck1, deck2) = decks(&[9, 4], &[1, 4]);
    assert!(matches!(
        play(deck1, deck2),
        Err(CombatError::InvalidState { round: 2, .. })
    ));
}

/// A lopsided game ends in as many rounds as the loser has cards.
#[test]
fn test_one_sided_game() {
    let (deck1, deck2) = decks(&[10, 9, 8], &[1, 2, 3]);
    let result = CombatEngine::new(GameConfig::combat())
        .play(GameState::new(deck1, deck2))
        .unwrap();

    assert_eq!(result.winner, PlayerId::ONE);
    assert_eq!(result.rounds, 3);
    assert_eq!(
        result.final_state.deck(PlayerId::ONE).to_values(),
        vec![10, 1, 9, 2, 8, 3]
    );
    assert_eq!(result.score, 10 * 6 + 1 * 5 + 9 * 4 + 2 * 3 + 8 * 2 + 3);
}
