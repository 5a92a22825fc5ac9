//! Match orchestration.
//!
//! `Match` runs the outer lifecycle: first deal, action intake, round
//! transitions, win detection and reset. `TurnTimer` is countdown
//! bookkeeping a driver can use to decide when to call
//! `Match::expire`.

mod controller;
mod timer;

pub use controller::{new_match, Match};
pub use timer::{TurnTimer, TurnToken};
