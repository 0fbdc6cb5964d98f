//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Combat is strictly a two-player game. `PlayerId` is 0-based internally,
//! but is numbered 1 and 2 wherever it is shown or reported.
//!
//! ## PlayerMap
//!
//! Fixed-size per-player storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in every Combat game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1. Wins any game cut short by a repeated state.
    pub const ONE: PlayerId = PlayerId(0);
    /// Player 2.
    pub const TWO: PlayerId = PlayerId(1);

    /// Look up a player by their 1-based number.
    ///
    /// ```
    /// use rust_combat::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_number(2), Some(PlayerId::TWO));
    /// assert_eq!(PlayerId::from_number(3), None);
    /// ```
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::ONE),
            2 => Some(Self::TWO),
            _ => None,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the player number (1-based), as reported in results.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both players, player 1 first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_combat::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// wins[PlayerId::TWO] += 1;
/// assert_eq!(wins[PlayerId::ONE], 0);
/// assert_eq!(wins[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a PlayerMap from player 1's and player 2's values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all().zip(self.data.iter_mut())
    }

    /// Transform each entry, keeping the player association.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|player| f(player, self.get(player)))
    }

    /// Consume the map, returning player 1's and player 2's values.
    pub fn into_pair(self) -> (T, T) {
        let [one, two] = self.data;
        (one, two)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
