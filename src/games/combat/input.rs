//! Puzzle input parsing.
//!
//! ```text
//! Player 1:
//! 9
//! 2
//!
//! Player 2:
//! 5
//! 8
//! ```
//!
//! Blank lines are skipped. Each `Player N:` header opens that player's
//! section; every other line is one card, front of the deck first.

use std::str::FromStr;

use crate::core::{Card, CombatError, Deck, GameState, PlayerId, PlayerMap, Result};

/// Parse both players' starting decks.
pub fn parse_decks(input: &str) -> Result<GameState> {
    let mut decks: PlayerMap<Option<Vec<Card>>> = PlayerMap::default();
    let mut current: Option<PlayerId> = None;

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(player) = parse_header(line, line_number)? {
            if decks[player].is_some() {
                return Err(CombatError::malformed(
                    line_number,
                    format!("{} appears twice", player),
                ));
            }
            decks[player] = Some(Vec::new());
            current = Some(player);
            continue;
        }

        let Some(player) = current else {
            return Err(CombatError::malformed(
                line_number,
                "card listed before any player header",
            ));
        };
        let card = parse_card(line, line_number)?;
        decks[player].get_or_insert_with(Vec::new).push(card);
    }

    let (one, two) = decks.into_pair();
    Ok(GameState::new(
        finish_deck(PlayerId::ONE, one)?,
        finish_deck(PlayerId::TWO, two)?,
    ))
}

/// Recognize a `Player N:` header. Returns `None` for any other line.
fn parse_header(line: &str, line_number: usize) -> Result<Option<PlayerId>> {
    let Some(number) = line
        .strip_prefix("Player")
        .and_then(|rest| rest.strip_suffix(':'))
    else {
        return Ok(None);
    };

    number
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(PlayerId::from_number)
        .map(Some)
        .ok_or_else(|| {
            CombatError::malformed(line_number, format!("unknown player {:?}", number.trim()))
        })
}

fn parse_card(line: &str, line_number: usize) -> Result<Card> {
    match line.parse::<u32>() {
        Ok(0) => Err(CombatError::malformed(line_number, "cards must be positive")),
        Ok(value) => Ok(Card::new(value)),
        Err(_) => Err(CombatError::malformed(
            line_number,
            format!("expected a card, found {:?}", line),
        )),
    }
}

fn finish_deck(player: PlayerId, cards: Option<Vec<Card>>) -> Result<Deck> {
    match cards {
        None => Err(CombatError::malformed(0, format!("missing {}", player))),
        Some(cards) if cards.is_empty() => {
            Err(CombatError::malformed(0, format!("{} has an empty deck", player)))
        }
        Some(cards) => Ok(cards.into_iter().collect()),
    }
}

impl FromStr for GameState {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self> {
        parse_decks(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Player 1:\n9\n2\n6\n3\n1\n\nPlayer 2:\n5\n8\n4\n7\n10\n";

    fn line_of(err: CombatError) -> usize {
        match err {
            CombatError::MalformedInput { line, .. } => line,
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_example() {
        let state = parse_decks(EXAMPLE).unwrap();
        assert_eq!(state.deck(PlayerId::ONE).to_values(), vec![9, 2, 6, 3, 1]);
        assert_eq!(state.deck(PlayerId::TWO).to_values(), vec![5, 8, 4, 7, 10]);
        assert_eq!(EXAMPLE.parse::<GameState>().unwrap(), state);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let input = "\r\nPlayer 1:\r\n 43\r\n19\r\n\r\nPlayer 2:\r\n2\r\n29\r\n14\r\n\r\n\r\n";
        let state = parse_decks(input).unwrap();
        assert_eq!(state.deck(PlayerId::ONE).to_values(), vec![43, 19]);
        assert_eq!(state.deck(PlayerId::TWO).to_values(), vec![2, 29, 14]);
    }

    #[test]
    fn test_player_order_does_not_matter() {
        let state = parse_decks("Player 2:\n5\n\nPlayer 1:\n9\n").unwrap();
        assert_eq!(state.deck(PlayerId::ONE).to_values(), vec![9]);
        assert_eq!(state.deck(PlayerId::TWO).to_values(), vec![5]);
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(line_of(parse_decks("9\nPlayer 1:\n").unwrap_err()), 1);
        assert_eq!(line_of(parse_decks("Player 1:\nnine\n").unwrap_err()), 2);
        assert_eq!(line_of(parse_decks("Player 1:\n0\n").unwrap_err()), 2);
        assert_eq!(line_of(parse_decks("Player 1:\n-3\n").unwrap_err()), 2);
        assert_eq!(line_of(parse_decks("Player 3:\n1\n").unwrap_err()), 1);
        assert_eq!(line_of(parse_decks("Player x:\n1\n").unwrap_err()), 1);
        assert_eq!(
            line_of(parse_decks("Player 1:\n1\nPlayer 1:\n2\n").unwrap_err()),
            3
        );
    }

    #[test]
    fn test_missing_or_empty_deck() {
        assert_eq!(
            parse_decks("Player 1:\n1\n").unwrap_err(),
            CombatError::malformed(0, "missing Player 2")
        );
        assert_eq!(
            parse_decks("Player 1:\n\nPlayer 2:\n4\n").unwrap_err(),
            CombatError::malformed(0, "Player 1 has an empty deck")
        );
        assert!(parse_decks("").is_err());
    }
}
