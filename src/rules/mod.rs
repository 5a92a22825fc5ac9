//! Game rules.
//!
//! - `round`: deal a new round
//! - `turn`: play cards, skip a timed-out turn
//! - `accusation`: judge the previous play, penalize, eliminate, redeal
//! - `engine`: legal actions and action dispatch
//! - `selection`: UI-side card selection feeding `play_cards`
//!
//! All functions validate before they mutate: a rejected action leaves the
//! round untouched.

pub mod accusation;
pub mod engine;
pub mod round;
pub mod selection;
pub mod turn;

pub use accusation::{judge_play, resolve_accusation, AccusationOutcome, Verdict};
pub use engine::{apply_action, legal_actions, TurnOutcome};
pub use round::{roll_table_rank, start_round};
pub use selection::{select_cards, CardSelection};
pub use turn::{handle_timeout, play_cards};
