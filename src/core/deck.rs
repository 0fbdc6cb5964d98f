//! Player decks.
//!
//! A `Deck` is an ordered pile of cards: the front is the next card to play
//! and won cards go to the back. Decks are backed by `im::Vector`, so cloning
//! one for a sub-game or a seen-state snapshot is O(1) while the copy remains
//! an independent value.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// An ordered deck of cards.
///
/// ## Example
///
/// ```
/// use rust_combat::core::{Card, Deck};
///
/// let mut deck = Deck::from_values([3, 1]);
/// assert_eq!(deck.draw(), Some(Card::new(3)));
/// deck.push_bottom(Card::new(9));
/// assert_eq!(deck.to_values(), vec![1, 9]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from raw face values, front first.
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        values.into_iter().map(Card::new).collect()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has run out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Peek at the next card to be played.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Append a card to the back.
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Copy of the top `count` cards, or `None` if the deck is too short.
    #[must_use]
    pub fn take_top(&self, count: usize) -> Option<Deck> {
        if count > self.cards.len() {
            return None;
        }
        Some(Self {
            cards: self.cards.take(count),
        })
    }

    /// Iterate cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Raw face values, front to back.
    #[must_use]
    pub fn to_values(&self) -> Vec<u32> {
        self.iter().map(Card::value).collect()
    }

    /// Winning score: the back card counts once, the one before it twice,
    /// and so on up to the front card, which counts `len` times.
    #[must_use]
    pub fn score(&self) -> u64 {
        let len = self.cards.len() as u64;
        self.iter()
            .zip((1..=len).rev())
            .map(|(card, multiplier)| u64::from(card.value()) * multiplier)
            .sum()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_and_push() {
        let mut deck = Deck::from_values([9, 2, 6]);
        assert_eq!(deck.top(), Some(Card::new(9)));
        assert_eq!(deck.draw(), Some(Card::new(9)));
        deck.push_bottom(Card::new(9));
        deck.push_bottom(Card::new(5));
        assert_eq!(deck.to_values(), vec![2, 6, 9, 5]);

        let mut empty = Deck::new();
        assert_eq!(empty.draw(), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_score() {
        // Player 2's final deck in the worked example.
        let deck = Deck::from_values([3, 2, 10, 6, 8, 5, 9, 4, 7, 1]);
        assert_eq!(deck.score(), 306);

        assert_eq!(Deck::new().score(), 0);
        assert_eq!(Deck::from_values([4]).score(), 4);
    }

    #[test]
    fn test_take_top_is_independent() {
        let mut deck = Deck::from_values([1, 2, 3, 4]);
        let top = deck.take_top(2).unwrap();
        assert_eq!(top.to_values(), vec![1, 2]);

        deck.draw();
        deck.push_bottom(Card::new(1));
        assert_eq!(top.to_values(), vec![1, 2]);

        assert_eq!(deck.take_top(4).map(|d| d.len()), Some(4));
        assert!(deck.take_top(5).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Deck::from_values([9, 2, 6]).to_string(), "9, 2, 6");
        assert_eq!(Deck::new().to_string(), "");
    }
}
