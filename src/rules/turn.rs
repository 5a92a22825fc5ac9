//! Turn engine: playing cards and skipping a timed-out turn.

use std::collections::BTreeSet;

use crate::cards::Card;
use crate::core::{GameError, GameResult, RoundState};

/// Play cards from the current player's hand.
///
/// `indices` refer to the hand as it is right now. Duplicates are ignored.
/// The cards are removed highest index first, so earlier removals never
/// shift a later index, and become `previous_play` in their original hand
/// order. The turn then passes to the next player.
///
/// Nothing changes if the play is rejected.
pub fn play_cards(state: &mut RoundState, indices: &[usize]) -> GameResult<()> {
    if state.is_over {
        return Err(GameError::MatchOver);
    }
    if indices.is_empty() {
        return Err(GameError::NoCardsSelected);
    }

    let current = state.current_player_index;
    let player = state
        .players
        .get_mut(current)
        .ok_or(GameError::MatchOver)?;

    let hand_size = player.hand.len();
    let selected: BTreeSet<usize> = indices.iter().copied().collect();
    if let Some(&index) = selected.iter().find(|&&i| i >= hand_size) {
        return Err(GameError::InvalidIndex { index, hand_size });
    }

    let mut played: Vec<Card> = selected
        .iter()
        .rev()
        .map(|&i| player.hand.remove(i))
        .collect();
    played.reverse();

    let count = played.len();
    state.last_action = format!(
        "{} played {} card{}",
        player.name,
        count,
        if count > 1 { "s" } else { "" }
    );
    tracing::debug!(player = %player.id, count, "cards played");

    state.previous_play = played;
    state.advance_turn();
    Ok(())
}

/// Skip the current player's turn after their clock ran out.
///
/// No cards move and nobody loses a life. `previous_play` stays on the
/// table, so the next player can still accuse it.
pub fn handle_timeout(state: &mut RoundState) -> GameResult<()> {
    if state.is_over {
        return Err(GameError::MatchOver);
    }
    let (id, name) = state
        .current_player()
        .map(|p| (p.id, p.name.clone()))
        .ok_or(GameError::MatchOver)?;

    state.last_action = format!("{}'s time ran out!", name);
    tracing::debug!(player = %id, "turn timed out");

    state.advance_turn();
    Ok(())
}
