//! Error types for the game engine.
//!
//! Every rejected operation leaves the round untouched: validation runs
//! before any mutation.

/// Errors that can occur while dealing or applying a turn action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A deal asked for more cards than the deck holds. Retrying without
    /// changing the roster or hand size fails the same way.
    #[error("cannot deal {requested} cards from a deck of {available}")]
    InsufficientCards { requested: usize, available: usize },

    /// A selection referenced a card the acting player does not hold.
    #[error("card index {index} is out of range for a hand of {hand_size}")]
    InvalidIndex { index: usize, hand_size: usize },

    /// A play was submitted with no cards.
    #[error("no cards selected")]
    NoCardsSelected,

    /// An accusation was made before anyone played this round.
    #[error("there is no play to accuse")]
    NoPlayToAccuse,

    /// A turn action arrived after the match ended.
    #[error("the match is over")]
    MatchOver,

    /// Roster size outside what the configuration can seat.
    #[error("{count} players cannot be seated (need {min} to {max})")]
    PlayerCount { count: usize, min: usize, max: usize },

    /// The configuration cannot produce a playable match.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Returns `true` if the caller can re-prompt and try again with the
    /// same round.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidIndex { .. } | Self::NoCardsSelected | Self::NoPlayToAccuse
        )
    }
}

/// Result alias used throughout the engine.
pub type GameResult<T> = Result<T, GameError>;
