//! Game configuration.
//!
//! Every tunable number in the rules lives here rather than as a literal in
//! the engine, so the rules can be exercised at smaller scales (a two-player
//! table with two-card hands, a three-life match, and so on).
//!
//! The defaults describe the standard table: four seats, five-card hands,
//! six lives, a 20-card deck and a 20 second turn clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use crate::cards::TableRank;

/// Lives each player starts a match with.
pub const DEFAULT_STARTING_LIVES: u32 = 6;

/// Cards dealt to each player per round.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Seconds a player has to act before the turn is skipped.
pub const DEFAULT_TURN_TIMEOUT_SECS: u64 = 20;

/// Copies of each regular rank (KING, QUEEN, ACE) in the deck.
pub const DEFAULT_COPIES_PER_RANK: usize = 6;

/// Jokers in the deck.
pub const DEFAULT_JOKER_COUNT: usize = 2;

/// Largest roster any configuration can seat, bounded by `PlayerId`.
pub const MAX_SEATS: usize = u8::MAX as usize;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lives each player starts a match with.
    pub starting_lives: u32,

    /// Cards dealt to each active player at the start of a round.
    pub hand_size: usize,

    /// Time a player has to act before the driver should call
    /// `handle_timeout`.
    pub turn_timeout: Duration,

    /// Copies of each regular rank in the deck.
    pub copies_per_rank: usize,

    /// Wild cards in the deck.
    pub joker_count: usize,

    /// Smallest roster a match may start with.
    pub min_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: DEFAULT_STARTING_LIVES,
            hand_size: DEFAULT_HAND_SIZE,
            turn_timeout: Duration::from_secs(DEFAULT_TURN_TIMEOUT_SECS),
            copies_per_rank: DEFAULT_COPIES_PER_RANK,
            joker_count: DEFAULT_JOKER_COUNT,
            min_players: 2,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting lives.
    #[must_use]
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Set the per-round hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the turn clock.
    #[must_use]
    pub fn with_turn_timeout(mut self, timeout: Duration) -> Self {
        self.turn_timeout = timeout;
        self
    }

    /// Set the number of copies of each regular rank.
    #[must_use]
    pub fn with_copies_per_rank(mut self, copies: usize) -> Self {
        self.copies_per_rank = copies;
        self
    }

    /// Set the number of jokers.
    #[must_use]
    pub fn with_joker_count(mut self, jokers: usize) -> Self {
        self.joker_count = jokers;
        self
    }

    /// Set the minimum roster size.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Total cards in a freshly built deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        TableRank::ALL.len() * self.copies_per_rank + self.joker_count
    }

    /// Largest roster the deck can deal a full hand to, capped at
    /// `MAX_SEATS`.
    #[must_use]
    pub fn max_players(&self) -> usize {
        if self.hand_size == 0 {
            return 0;
        }
        (self.deck_size() / self.hand_size).min(MAX_SEATS)
    }

    /// Check that a match can actually be played with this configuration.
    pub fn validate(&self) -> GameResult<()> {
        if self.starting_lives == 0 {
            return Err(GameError::InvalidConfig(
                "starting lives must be at least 1".to_string(),
            ));
        }
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig(
                "hand size must be at least 1".to_string(),
            ));
        }
        if self.min_players < 2 {
            return Err(GameError::InvalidConfig(
                "a match needs at least 2 players".to_string(),
            ));
        }
        if self.max_players() < self.min_players {
            return Err(GameError::InvalidConfig(format!(
                "a {}-card deck cannot deal {} hands of {}",
                self.deck_size(),
                self.min_players,
                self.hand_size
            )));
        }
        Ok(())
    }

    /// Check a roster size against the seatable range.
    pub fn check_player_count(&self, count: usize) -> GameResult<()> {
        let max = self.max_players();
        if count < self.min_players || count > max {
            return Err(GameError::PlayerCount {
                count,
                min: self.min_players,
                max,
            });
        }
        Ok(())
    }
}
