//! Error types.

use super::card::Card;

/// Failures surfaced by parsing and by the game loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatError {
    /// The input text does not describe two non-empty decks.
    MalformedInput {
        /// 1-based line number, or 0 when the problem is the input as a whole.
        line: usize,
        reason: String,
    },
    /// Both players drew the same card, which no rule can resolve.
    InvalidState {
        /// Sub-game nesting depth (0 = top-level game).
        depth: u32,
        round: u32,
        card: Card,
    },
}

impl CombatError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for CombatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput { line: 0, reason } => write!(f, "malformed input: {}", reason),
            Self::MalformedInput { line, reason } => {
                write!(f, "malformed input at line {}: {}", line, reason)
            }
            Self::InvalidState { depth, round, card } => write!(
                f,
                "invalid state: both players drew {} in round {} at depth {}",
                card, round, depth
            ),
        }
    }
}

impl std::error::Error for CombatError {}

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, CombatError>;
