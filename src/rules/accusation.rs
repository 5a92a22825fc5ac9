//! Accusation resolution: judge the previous play, take a life, eliminate,
//! and either redeal or end the match.

use serde::{Deserialize, Serialize};

use super::round::start_round;
use crate::cards::{Card, TableRank};
use crate::core::{GameConfig, GameError, GameResult, GameRng, Player, PlayerId, RoundState};

/// How an accusation was judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The play held a card that neither matched the table rank nor was
    /// wild. The accused loses a life.
    Lie,
    /// Every card matched or was wild. The accuser loses a life.
    Truth,
}

/// Judge a play against the table rank.
///
/// A play is a lie if and only if at least one card is neither a joker nor
/// of the table rank.
#[must_use]
pub fn judge_play(cards: &[Card], table_rank: TableRank) -> Verdict {
    if cards.iter().any(|c| !c.rank.satisfies(table_rank)) {
        Verdict::Lie
    } else {
        Verdict::Truth
    }
}

/// Everything that happened while settling an accusation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccusationOutcome {
    pub accuser: PlayerId,
    pub accused: PlayerId,
    pub verdict: Verdict,
    /// Who lost the life.
    pub penalized: PlayerId,
    /// Lives the penalized player has left.
    pub lives_left: u32,
    /// Set when the penalty took the last life.
    pub eliminated: Option<PlayerId>,
    /// Set when the match ended.
    pub winner: Option<PlayerId>,
}

/// Settle an accusation by the current player against the previous one.
///
/// On a lie the accused loses a life, otherwise the accuser does. A player
/// left with no lives is removed. If one player remains the match is over;
/// otherwise a new round is dealt to the survivors. Either way the previous
/// play is cleared.
///
/// The new round is built before `state` is touched, so a failure leaves the
/// round exactly as it was.
pub fn resolve_accusation(
    state: &mut RoundState,
    config: &GameConfig,
    rng: &mut GameRng,
) -> GameResult<AccusationOutcome> {
    if state.is_over {
        return Err(GameError::MatchOver);
    }
    if !state.has_previous_play() {
        return Err(GameError::NoPlayToAccuse);
    }

    let accuser_index = state.current_player_index;
    let accused_index = state.previous_player_index();
    let verdict = judge_play(&state.previous_play, state.table_rank);

    let mut players = state.players.clone();
    let accuser = players[accuser_index].id;
    let accused = players[accused_index].id;
    let accuser_name = players[accuser_index].name.clone();
    let accused_name = players[accused_index].name.clone();

    let penalized_index = match verdict {
        Verdict::Lie => accused_index,
        Verdict::Truth => accuser_index,
    };
    players[penalized_index].lose_life();
    let penalized = players[penalized_index].id;
    let lives_left = players[penalized_index].lives;
    let eliminated = (lives_left == 0).then_some(penalized);

    let result = match verdict {
        Verdict::Lie => format!("{} caught {} lying!", accuser_name, accused_name),
        Verdict::Truth => format!("{} accused wrongly and lost a life!", accuser_name),
    };

    tracing::info!(
        %accuser,
        %accused,
        ?verdict,
        %penalized,
        lives_left,
        "accusation resolved"
    );
    if let Some(out) = eliminated {
        tracing::info!(player = %out, "player eliminated");
    }

    let survivors: Vec<Player> = players.into_iter().filter(Player::is_alive).collect();

    let next = if survivors.len() == 1 {
        let winner = survivors[0].clone();
        tracing::info!(winner = %winner.id, "match over");
        RoundState {
            players: survivors,
            table_rank: state.table_rank,
            current_player_index: 0,
            previous_play: Vec::new(),
            last_action: format!("{} - Game Over!", result),
            is_over: true,
            winner: Some(winner),
        }
    } else {
        let mut round = start_round(survivors, config, rng)?;
        round.last_action = format!("{} - New round started!", result);
        round
    };

    let winner = next.winner.as_ref().map(|p| p.id);
    *state = next;

    Ok(AccusationOutcome {
        accuser,
        accused,
        verdict,
        penalized,
        lives_left,
        eliminated,
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().enumerate().map(|(i, &r)| Card::new(r, i)).collect()
    }

    fn table(lives: &[u32]) -> RoundState {
        RoundState {
            players: lives
                .iter()
                .zip(PlayerId::seats(lives.len()))
                .map(|(&l, id)| {
                    let mut p = Player::new(id, id.to_string(), l);
                    p.hand = cards(&[Rank::Ace, Rank::Ace]);
                    p
                })
                .collect(),
            table_rank: TableRank::King,
            current_player_index: 1,
            previous_play: Vec::new(),
            last_action: String::new(),
            is_over: false,
            winner: None,
        }
    }

    #[test]
    fn test_judge_truthful_with_joker() {
        let play = cards(&[Rank::King, Rank::King, Rank::Joker]);
        assert_eq!(judge_play(&play, TableRank::King), Verdict::Truth);
    }

    #[test]
    fn test_judge_lie() {
        let play = cards(&[Rank::King, Rank::Queen]);
        assert_eq!(judge_play(&play, TableRank::King), Verdict::Lie);
    }

    #[test]
    fn test_judge_jokers_always_truthful() {
        let play = cards(&[Rank::Joker, Rank::Joker]);
        for table in TableRank::ALL {
            assert_eq!(judge_play(&play, table), Verdict::Truth);
        }
    }

    #[test]
    fn test_no_play_to_accuse() {
        let mut state = table(&[6, 6, 6]);
        let before = state.clone();
        let mut rng = GameRng::new(1);

        let result = resolve_accusation(&mut state, &GameConfig::default(), &mut rng);

        assert_eq!(result, Err(GameError::NoPlayToAccuse));
        assert_eq!(state, before);
    }

    #[test]
    fn test_correct_accusation_penalizes_accused() {
        let mut state = table(&[6, 6, 6]);
        state.previous_play = cards(&[Rank::King, Rank::Queen]);
        let mut rng = GameRng::new(2);

        let outcome = resolve_accusation(&mut state, &GameConfig::default(), &mut rng).unwrap();

        assert_eq!(outcome.verdict, Verdict::Lie);
        assert_eq!(outcome.accuser, PlayerId::new(2));
        assert_eq!(outcome.accused, PlayerId::new(1));
        assert_eq!(outcome.penalized, PlayerId::new(1));
        assert_eq!(outcome.lives_left, 5);
        assert_eq!(state.player(PlayerId::new(1)).unwrap().lives, 5);
        assert_eq!(state.player(PlayerId::new(2)).unwrap().lives, 6);
        assert_eq!(state.last_action, "Player 2 caught Player 1 lying! - New round started!");
    }

    #[test]
    fn test_wrong_accusation_penalizes_accuser() {
        let mut state = table(&[6, 6, 6]);
        state.previous_play = cards(&[Rank::King, Rank::Joker]);
        let mut rng = GameRng::new(3);

        let outcome = resolve_accusation(&mut state, &GameConfig::default(), &mut rng).unwrap();

        assert_eq!(outcome.verdict, Verdict::Truth);
        assert_eq!(outcome.penalized, PlayerId::new(2));
        assert_eq!(state.player(PlayerId::new(2)).unwrap().lives, 5);
        assert_eq!(
            state.last_action,
            "Player 2 accused wrongly and lost a life! - New round started!"
        );
    }

    #[test]
    fn test_new_round_after_accusation() {
        let mut state = table(&[6, 6, 6]);
        state.current_player_index = 2;
        state.previous_play = cards(&[Rank::Queen]);
        let mut rng = GameRng::new(4);

        resolve_accusation(&mut state, &GameConfig::default(), &mut rng).unwrap();

        assert_eq!(state.current_player_index, 0);
        assert!(state.previous_play.is_empty());
        assert!(!state.is_over);
        for player in &state.players {
            assert_eq!(player.hand.len(), 5);
        }
    }

    #[test]
    fn test_accused_wraps_to_last_seat() {
        let mut state = table(&[6, 6, 6]);
        state.current_player_index = 0;
        state.previous_play = cards(&[Rank::Ace]);
        let mut rng = GameRng::new(5);

        let outcome = resolve_accusation(&mut state, &GameConfig::default(), &mut rng).unwrap();

        assert_eq!(outcome.accused, PlayerId::new(3));
        assert_eq!(outcome.penalized, PlayerId::new(3));
    }

    #[test]
    fn test_elimination_removes_player() {
        let mut state = table(&[1, 6, 6]);
        state.previous_play = cards(&[Rank::Ace]);
        let mut rng = GameRng::new(6);

        let outcome = resolve_accusation(&mut state, &GameConfig::default(), &mut rng).unwrap();

        assert_eq!(outcome.eliminated, Some(PlayerId::new(1)));
        assert_eq!(outcome.winner, None);
        assert_eq!(state.player_count(), 2);
        assert!(state.player(PlayerId::new(1)).is_none());
        assert!(!state.is_over);
    }

    #[test]
    fn test_last_survivor_wins() {
        let mut state = table(&[1, 3]);
        state.previous_play = cards(&[Rank::Queen]);
        let mut rng = GameRng::new(7);

        let outcome = resolve_accusation(&mut state, &GameConfig::default(), &mut rng).unwrap();

        assert_eq!(outcome.winner, Some(PlayerId::new(2)));
        assert!(state.is_over);
        assert_eq!(state.winner.as_ref().map(|p| p.id), Some(PlayerId::new(2)));
        assert_eq!(state.player_count(), 1);
        assert!(state.previous_play.is_empty());
        assert!(state.last_action.ends_with(" - Game Over!"));
    }

    #[test]
    fn test_no_accusation_after_match_over() {
        let mut state = table(&[6, 6]);
        state.previous_play = cards(&[Rank::Queen]);
        state.is_over = true;
        let mut rng = GameRng::new(8);

        assert_eq!(
            resolve_accusation(&mut state, &GameConfig::default(), &mut rng),
            Err(GameError::MatchOver)
        );
    }

    #[test]
    fn test_failed_redeal_leaves_state_untouched() {
        let mut state = table(&[6, 6, 6]);
        state.previous_play = cards(&[Rank::Queen]);
        let before = state.clone();
        // Three hands of ten cannot come out of a 20-card deck
        let config = GameConfig::new().with_hand_size(10);
        let mut rng = GameRng::new(9);

        let result = resolve_accusation(&mut state, &config, &mut rng);

        assert!(matches!(result, Err(GameError::InsufficientCards { .. })));
        assert_eq!(state, before);
    }
}
