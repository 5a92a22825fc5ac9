//! Turn actions and the action history.
//!
//! Three things can happen on a turn:
//! - "Play" = put one or more cards from hand face down, claiming the table rank
//! - "Accuse" = call the previous play a lie
//! - "Timeout" = the turn clock ran out, the turn is skipped
//!
//! Every accepted action is recorded as an `ActionRecord`, which is enough
//! to replay a match from its seed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// Card indices into the acting player's hand.
///
/// SmallVec keeps a full five-card play off the heap.
pub type CardIndices = SmallVec<[usize; 5]>;

/// A turn action.
///
/// ## Example
///
/// ```
/// use liars_table::core::{Action, ActionKind};
///
/// let play = Action::play(&[0, 2]);
/// assert_eq!(play.kind(), ActionKind::Play);
///
/// let accuse = Action::Accuse;
/// assert_eq!(accuse.kind(), ActionKind::Accuse);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the cards at these hand indices.
    Play { indices: CardIndices },
    /// Challenge the previous play.
    Accuse,
    /// The turn clock expired.
    Timeout,
}

impl Action {
    /// Create a play action from hand indices.
    #[must_use]
    pub fn play(indices: &[usize]) -> Self {
        Action::Play {
            indices: SmallVec::from_slice(indices),
        }
    }

    /// The action's kind, without its payload.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Play { .. } => ActionKind::Play,
            Action::Accuse => ActionKind::Accuse,
            Action::Timeout => ActionKind::Timeout,
        }
    }
}

/// Action kinds, used to tell a UI which actions to enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Play,
    Accuse,
    Timeout,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken (starts at 1).
    pub round: u32,

    /// Sequence number within the round.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
