//! Card selection bookkeeping for a UI.
//!
//! Selection is not part of the authoritative round: it only collects the
//! indices that will be handed to `play_cards`. It keeps toggle order and
//! is checked against the hand again when the play is applied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, CardIndices, GameError, GameResult, RoundState};

/// A set of selected hand indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSelection {
    indices: CardIndices,
}

impl CardSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `index` if absent, remove it if present. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if let Some(pos) = self.indices.iter().position(|&i| i == index) {
            self.indices.remove(pos);
            false
        } else {
            self.indices.push(index);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Check every selected index against a hand size.
    pub fn validate(&self, hand_size: usize) -> GameResult<()> {
        if self.indices.is_empty() {
            return Err(GameError::NoCardsSelected);
        }
        match self.indices.iter().find(|&&i| i >= hand_size) {
            Some(&index) => Err(GameError::InvalidIndex { index, hand_size }),
            None => Ok(()),
        }
    }

    /// Turn the selection into a play action, leaving the selection empty.
    pub fn take_play(&mut self) -> Action {
        Action::Play {
            indices: std::mem::replace(&mut self.indices, SmallVec::new()),
        }
    }
}

/// Toggle `card_indices` in `selection` for the player at `player_index`.
///
/// Every index is checked against that player's current hand before any of
/// them is toggled.
pub fn select_cards(
    state: &RoundState,
    player_index: usize,
    selection: &mut CardSelection,
    card_indices: &[usize],
) -> GameResult<()> {
    // An unknown seat holds no cards, so every index is out of range.
    let hand_size = state
        .players
        .get(player_index)
        .map_or(0, |p| p.hand.len());

    if let Some(&index) = card_indices.iter().find(|&&i| i >= hand_size) {
        return Err(GameError::InvalidIndex { index, hand_size });
    }

    for &index in card_indices {
        selection.toggle(index);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, TableRank};
    use crate::core::{Player, PlayerId};

    fn table() -> RoundState {
        let mut player = Player::new(PlayerId::new(1), "Ada", 6);
        player.hand = (0..3).map(|i| Card::new(Rank::Queen, i)).collect();
        RoundState {
            players: vec![player, Player::new(PlayerId::new(2), "Bo", 6)],
            table_rank: TableRank::Queen,
            current_player_index: 0,
            previous_play: Vec::new(),
            last_action: String::new(),
            is_over: false,
            winner: None,
        }
    }

    #[test]
    fn test_toggle() {
        let mut selection = CardSelection::new();

        assert!(selection.toggle(2));
        assert!(selection.toggle(0));
        assert_eq!(selection.indices(), &[2, 0]);

        assert!(!selection.toggle(2));
        assert_eq!(selection.indices(), &[0]);
        assert!(selection.contains(0));
        assert!(!selection.contains(2));
    }

    #[test]
    fn test_select_cards_validates_first() {
        let state = table();
        let mut selection = CardSelection::new();

        select_cards(&state, 0, &mut selection, &[0, 1]).unwrap();
        assert_eq!(selection.len(), 2);

        let err = select_cards(&state, 0, &mut selection, &[2, 7]);
        assert_eq!(err, Err(GameError::InvalidIndex { index: 7, hand_size: 3 }));
        assert_eq!(selection.indices(), &[0, 1]);
    }

    #[test]
    fn test_select_for_empty_hand() {
        let state = table();
        let mut selection = CardSelection::new();

        assert_eq!(
            select_cards(&state, 1, &mut selection, &[0]),
            Err(GameError::InvalidIndex { index: 0, hand_size: 0 })
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn test_validate() {
        let mut selection = CardSelection::new();
        assert_eq!(selection.validate(5), Err(GameError::NoCardsSelected));

        selection.toggle(4);
        assert!(selection.validate(5).is_ok());
        assert_eq!(
            selection.validate(4),
            Err(GameError::InvalidIndex { index: 4, hand_size: 4 })
        );
    }

    #[test]
    fn test_take_play_clears() {
        let mut selection = CardSelection::new();
        selection.toggle(1);
        selection.toggle(3);

        let action = selection.take_play();

        assert_eq!(action, Action::play(&[1, 3]));
        assert!(selection.is_empty());
    }
}
