//! Round state and its read-only render projection.
//!
//! ## RoundState
//!
//! Authoritative snapshot of the round in progress:
//! - Active players in turn order, with hands and lives
//! - Table rank, turn pointer, previous play
//! - Match-over flag and winner
//!
//! ## RoundView
//!
//! What a presentation layer renders: the same facts flattened into plain,
//! serializable values, with no way to mutate the round through it.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::cards::{Card, TableRank};

/// Mutable round aggregate, owned by the match controller.
///
/// `players` is the active roster in rotation order. Whenever it is
/// non-empty, `current_player_index < players.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Active players in turn order.
    pub players: Vec<Player>,

    /// Rank every non-wild card played this round must match.
    pub table_rank: TableRank,

    /// Index into `players` of the player to act.
    pub current_player_index: usize,

    /// Cards from the most recent play. Empty at round start and after an
    /// accusation is settled.
    pub previous_play: Vec<Card>,

    /// Human-readable description of the last thing that happened.
    pub last_action: String,

    pub is_over: bool,

    /// Set only once a single player remains.
    pub winner: Option<Player>,
}

impl RoundState {
    /// Number of active players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Index of the player who acted just before the current one.
    ///
    /// Under fixed rotation this is always the author of `previous_play`.
    #[must_use]
    pub fn previous_player_index(&self) -> usize {
        let len = self.players.len();
        if len == 0 {
            return 0;
        }
        (self.current_player_index + len - 1) % len
    }

    /// Move the turn pointer to the next player in rotation.
    pub fn advance_turn(&mut self) {
        let len = self.players.len();
        if len > 0 {
            self.current_player_index = (self.current_player_index + 1) % len;
        }
    }

    /// Is there a play on the table to accuse?
    #[must_use]
    pub fn has_previous_play(&self) -> bool {
        !self.previous_play.is_empty()
    }

    /// Find an active player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Position of an active player in rotation order.
    #[must_use]
    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Build the render projection.
    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView {
            table_rank: self.table_rank,
            current_player: self.current_player().map(|p| p.id),
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(i, p)| PlayerView {
                    id: p.id,
                    name: p.name.clone(),
                    lives: p.lives,
                    hand_size: p.hand.len(),
                    hand: p.hand.clone(),
                    is_automated: p.is_automated,
                    is_current: !self.is_over && i == self.current_player_index,
                })
                .collect(),
            previous_play: self.previous_play.clone(),
            last_action: self.last_action.clone(),
            is_over: self.is_over,
            winner: self.winner.as_ref().map(|p| p.id),
        }
    }
}

/// Render projection of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub lives: u32,
    pub hand_size: usize,
    pub hand: Vec<Card>,
    pub is_automated: bool,
    /// Whose turn it is.
    pub is_current: bool,
}

/// Render projection of the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub table_rank: TableRank,
    pub current_player: Option<PlayerId>,
    pub players: Vec<PlayerView>,
    pub previous_play: Vec<Card>,
    pub last_action: String,
    pub is_over: bool,
    pub winner: Option<PlayerId>,
}
