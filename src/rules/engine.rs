//! Action dispatch over a round.
//!
//! - `legal_actions`: what the current player may do right now
//! - `apply_action`: route an `Action` to the turn engine or the
//!   accusation resolver

use serde::{Deserialize, Serialize};

use super::accusation::{resolve_accusation, AccusationOutcome};
use super::turn::{handle_timeout, play_cards};
use crate::core::{
    Action, ActionKind, GameConfig, GameError, GameResult, GameRng, PlayerId, RoundState,
};

/// Result of an accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Cards were played and the turn passed on.
    Played { player: PlayerId, count: usize },
    /// The turn was skipped.
    TimedOut { player: PlayerId },
    /// An accusation was settled.
    Accused(AccusationOutcome),
}

impl TurnOutcome {
    /// Did this action end the round (new deal or match over)?
    #[must_use]
    pub fn ends_round(&self) -> bool {
        matches!(self, TurnOutcome::Accused(_))
    }
}

/// Actions available to the current player.
///
/// Empty once the match is over. Accuse is only offered when there is a
/// play on the table, and Play only when the player still holds cards.
#[must_use]
pub fn legal_actions(state: &RoundState) -> Vec<ActionKind> {
    let Some(player) = state.current_player() else {
        return vec![];
    };
    if state.is_over {
        return vec![];
    }

    let mut actions = Vec::with_capacity(3);
    if !player.hand.is_empty() {
        actions.push(ActionKind::Play);
    }
    if state.has_previous_play() {
        actions.push(ActionKind::Accuse);
    }
    actions.push(ActionKind::Timeout);
    actions
}

fn actor(state: &RoundState) -> GameResult<PlayerId> {
    if state.is_over {
        return Err(GameError::MatchOver);
    }
    state.current_player().map(|p| p.id).ok_or(GameError::MatchOver)
}

/// Apply an action on behalf of the current player.
pub fn apply_action(
    state: &mut RoundState,
    action: &Action,
    config: &GameConfig,
    rng: &mut GameRng,
) -> GameResult<TurnOutcome> {
    match action {
        Action::Play { indices } => {
            let player = actor(state)?;
            play_cards(state, indices)?;
            Ok(TurnOutcome::Played {
                player,
                count: state.previous_play.len(),
            })
        }
        Action::Timeout => {
            let player = actor(state)?;
            handle_timeout(state)?;
            Ok(TurnOutcome::TimedOut { player })
        }
        Action::Accuse => resolve_accusation(state, config, rng).map(TurnOutcome::Accused),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, TableRank};
    use crate::core::Player;

    fn table() -> RoundState {
        RoundState {
            players: PlayerId::seats(3)
                .map(|id| {
                    let mut p = Player::new(id, id.to_string(), 6);
                    p.hand = vec![Card::new(Rank::King, id.raw() as usize)];
                    p
                })
                .collect(),
            table_rank: TableRank::King,
            current_player_index: 0,
            previous_play: Vec::new(),
            last_action: String::new(),
            is_over: false,
            winner: None,
        }
    }

    #[test]
    fn test_legal_actions_at_round_start() {
        let state = table();
        assert_eq!(legal_actions(&state), vec![ActionKind::Play, ActionKind::Timeout]);
    }

    #[test]
    fn test_legal_actions_after_play() {
        let mut state = table();
        play_cards(&mut state, &[0]).unwrap();

        assert_eq!(
            legal_actions(&state),
            vec![ActionKind::Play, ActionKind::Accuse, ActionKind::Timeout]
        );
    }

    #[test]
    fn test_legal_actions_empty_hand() {
        let mut state = table();
        state.players[0].hand.clear();
        state.previous_play = vec![Card::new(Rank::Ace, 0)];

        assert_eq!(legal_actions(&state), vec![ActionKind::Accuse, ActionKind::Timeout]);
    }

    #[test]
    fn test_legal_actions_match_over() {
        let mut state = table();
        state.is_over = true;
        assert!(legal_actions(&state).is_empty());
    }

    #[test]
    fn test_apply_dispatch() {
        let mut state = table();
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);

        let played = apply_action(&mut state, &Action::play(&[0]), &config, &mut rng).unwrap();
        assert_eq!(played, TurnOutcome::Played { player: PlayerId::new(1), count: 1 });
        assert!(!played.ends_round());

        let skipped = apply_action(&mut state, &Action::Timeout, &config, &mut rng).unwrap();
        assert_eq!(skipped, TurnOutcome::TimedOut { player: PlayerId::new(2) });

        // Player 3 accuses Player 2, who never played: the pending KING stays
        // on the table and is judged truthful.
        let accused = apply_action(&mut state, &Action::Accuse, &config, &mut rng).unwrap();
        match accused {
            TurnOutcome::Accused(outcome) => {
                assert_eq!(outcome.accuser, PlayerId::new(3));
                assert_eq!(outcome.accused, PlayerId::new(2));
                assert_eq!(outcome.penalized, PlayerId::new(3));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_apply_propagates_errors() {
        let mut state = table();
        let config = GameConfig::default();
        let mut rng = GameRng::new(1);

        assert_eq!(
            apply_action(&mut state, &Action::play(&[]), &config, &mut rng),
            Err(GameError::NoCardsSelected)
        );
        assert_eq!(
            apply_action(&mut state, &Action::Accuse, &config, &mut rng),
            Err(GameError::NoPlayToAccuse)
        );
    }
}
