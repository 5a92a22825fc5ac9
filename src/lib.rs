//! # liars-table
//!
//! Rule engine for a turn-based bluffing card game in the style of
//! Liar's Bar.
//!
//! ## Rules in Brief
//!
//! 1. Every round deals five cards to each seat from a 20-card deck
//!    (6 KING, 6 QUEEN, 6 ACE, 2 JOKER) and rolls a table rank.
//!
//! 2. On your turn you play cards face down, claiming they match the table
//!    rank, or accuse the previous player of lying. A clock that runs out
//!    skips your turn.
//!
//! 3. A play is a lie if any card is neither the table rank nor a joker.
//!    A caught liar loses a life; a wrong accuser loses a life instead.
//!    Every accusation ends the round and triggers a fresh deal.
//!
//! 4. Players with no lives left are out. The last one standing wins.
//!
//! ## Architecture
//!
//! - **Explicit transitions**: every action is a synchronous function over
//!   the round state. Timers belong to the driver, which reports expiries.
//!
//! - **All-or-nothing**: actions validate before mutating; a rejected
//!   action leaves the round exactly as it was.
//!
//! - **Deterministic**: all randomness flows through a seeded `GameRng`,
//!   so a match replays identically from its seed and action history.
//!
//! ## Modules
//!
//! - `core`: Players, round state, actions, RNG, configuration, errors
//! - `cards`: Ranks, cards, deck building and dealing
//! - `rules`: Round setup, turn engine, accusation resolver, selection
//! - `game`: Match controller and turn timer

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, GameConfig, GameError, GameResult, GameRng, GameRngState,
    Player, PlayerId, PlayerView, RoundState, RoundView,
};

pub use crate::cards::{build_deck, deal_cards, shuffle, Card, CardId, Rank, TableRank};

pub use crate::rules::{
    apply_action, handle_timeout, judge_play, legal_actions, play_cards, resolve_accusation,
    select_cards, start_round, AccusationOutcome, CardSelection, TurnOutcome, Verdict,
};

pub use crate::game::{new_match, Match, TurnTimer, TurnToken};
