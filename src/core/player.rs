//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Seat number assigned at match creation. Stable for the whole match, even
//! after other players are eliminated and the active roster shrinks.
//!
//! ## Player
//!
//! Lives, hand and display name for one seat.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Player identifier.
///
/// Seats are numbered from 1 in roster order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Seat ids for a roster of `player_count` players.
    ///
    /// Yields at most `u8::MAX` ids; `GameConfig::max_players` never
    /// allows a larger roster.
    ///
    /// ```
    /// use liars_table::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::seats(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], PlayerId::new(1));
    /// assert_eq!(seats[3], PlayerId::new(4));
    /// ```
    pub fn seats(player_count: usize) -> impl Iterator<Item = PlayerId> {
        let count = u8::try_from(player_count).unwrap_or(u8::MAX);
        (1..=count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    pub name: String,

    /// Remaining lives. Only ever decremented; at zero the player leaves
    /// the active roster.
    pub lives: u32,

    /// Cards held this round. Order is for display only.
    pub hand: Vec<Card>,

    /// Marks a seat driven by an automated agent. The rules ignore it.
    pub is_automated: bool,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: PlayerId, name: impl Into<String>, lives: u32) -> Self {
        Self {
            id,
            name: name.into(),
            lives,
            hand: Vec::new(),
            is_automated: false,
        }
    }

    /// Mark this seat as automated.
    #[must_use]
    pub fn automated(mut self) -> Self {
        self.is_automated = true;
        self
    }

    /// Still in the match?
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Take one life. Saturates at zero.
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}
