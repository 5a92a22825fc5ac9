//! Deck building, shuffling and dealing.
//!
//! Decks are plain `Vec<Card>` values. Every function here takes its input
//! by reference and returns new vectors, so a caller holding the original
//! deck never sees it change.

use super::card::{Card, Rank, TableRank};
use crate::core::{GameConfig, GameError, GameResult, GameRng};

/// Build an unshuffled deck: `copies_per_rank` of each table rank, in
/// KING, QUEEN, ACE order, followed by the jokers.
///
/// Regular copies are numbered from 0, jokers from 1.
#[must_use]
pub fn build_deck(config: &GameConfig) -> Vec<Card> {
    let mut deck = Vec::with_capacity(config.deck_size());

    for rank in TableRank::ALL.map(TableRank::rank) {
        deck.extend((0..config.copies_per_rank).map(|i| Card::new(rank, i)));
    }
    deck.extend((1..=config.joker_count).map(|i| Card::new(Rank::Joker, i)));

    deck
}

/// Return a uniformly random permutation of `deck`.
#[must_use]
pub fn shuffle(deck: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}

/// Split the first `n` cards off the top of `deck`.
///
/// Returns `(dealt, remainder)`; concatenating them reproduces `deck`.
pub fn deal_cards(deck: &[Card], n: usize) -> GameResult<(Vec<Card>, Vec<Card>)> {
    if n > deck.len() {
        return Err(GameError::InsufficientCards {
            requested: n,
            available: deck.len(),
        });
    }

    let (dealt, remainder) = deck.split_at(n);
    Ok((dealt.to_vec(), remainder.to_vec()))
}

/// Count cards of a rank.
#[must_use]
pub fn count_rank(cards: &[Card], rank: Rank) -> usize {
    cards.iter().filter(|c| c.rank == rank).count()
}
