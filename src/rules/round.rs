//! Round setup: fresh deck, fresh hands, fresh table rank.

use crate::cards::{build_deck, deal_cards, shuffle, TableRank};
use crate::core::{GameConfig, GameError, GameResult, GameRng, Player, RoundState};

/// Pick a table rank uniformly from KING, QUEEN, ACE.
pub fn roll_table_rank(rng: &mut GameRng) -> TableRank {
    TableRank::ALL[rng.gen_range_usize(0..TableRank::ALL.len())]
}

/// Deal a new round to `players`.
///
/// Builds and shuffles a fresh deck, replaces every hand with
/// `config.hand_size` cards, rolls the table rank and hands the turn to the
/// first player. Players with no lives left are dropped from the roster and
/// dealt nothing.
///
/// Fails with `PlayerCount` when fewer than `config.min_players` are still
/// alive, and with `InsufficientCards` when the deck cannot cover every
/// hand; nothing is dealt in either case.
pub fn start_round(
    players: Vec<Player>,
    config: &GameConfig,
    rng: &mut GameRng,
) -> GameResult<RoundState> {
    let mut players: Vec<Player> = players.into_iter().filter(Player::is_alive).collect();
    if players.len() < config.min_players {
        return Err(GameError::PlayerCount {
            count: players.len(),
            min: config.min_players,
            max: config.max_players(),
        });
    }

    let deck = shuffle(&build_deck(config), rng);
    let needed = players.len() * config.hand_size;
    if needed > deck.len() {
        return Err(GameError::InsufficientCards {
            requested: needed,
            available: deck.len(),
        });
    }

    let mut remaining = deck;
    for player in &mut players {
        let (hand, rest) = deal_cards(&remaining, config.hand_size)?;
        player.hand = hand;
        remaining = rest;
    }

    let table_rank = roll_table_rank(rng);

    tracing::info!(
        players = players.len(),
        %table_rank,
        "round dealt"
    );

    Ok(RoundState {
        players,
        table_rank,
        current_player_index: 0,
        previous_play: Vec::new(),
        last_action: "New round started".to_string(),
        is_over: false,
        winner: None,
    })
}
