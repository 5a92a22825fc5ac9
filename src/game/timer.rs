//! Turn clock bookkeeping for the driver.
//!
//! The engine never sleeps or schedules anything. A driver (event loop,
//! UI, request handler) owns the clock and asks it, with its own notion of
//! "now", whether the current turn has expired:
//!
//! ```
//! use std::time::{Duration, Instant};
//! use liars_table::game::{TurnTimer, TurnToken};
//!
//! let start = Instant::now();
//! let mut timer = TurnTimer::new(Duration::from_secs(20));
//! timer.restart(TurnToken::new(0, 1, 0), start);
//!
//! assert_eq!(timer.poll(start + Duration::from_secs(5)), None);
//! assert_eq!(timer.poll(start + Duration::from_secs(20)), Some(TurnToken::new(0, 1, 0)));
//! // An expiry is reported once.
//! assert_eq!(timer.poll(start + Duration::from_secs(30)), None);
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Identifies one turn of one round of one game.
///
/// Tokens from a turn that has since been played, skipped, or superseded by
/// a new deal or a reset no longer match the match's current token, which
/// is how a late expiry gets ignored. `game` counts resets and never goes
/// back, so round numbering can restart at 1 without reissuing old tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnToken {
    pub game: u32,
    pub round: u32,
    pub sequence: u32,
}

impl TurnToken {
    #[must_use]
    pub const fn new(game: u32, round: u32, sequence: u32) -> Self {
        Self {
            game,
            round,
            sequence,
        }
    }
}

/// Countdown for the current turn.
#[derive(Clone, Debug)]
pub struct TurnTimer {
    timeout: Duration,
    deadline: Option<Instant>,
    token: Option<TurnToken>,
}

impl TurnTimer {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: None,
            token: None,
        }
    }

    /// The configured turn length.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Start a fresh countdown for `token`, replacing any pending one.
    pub fn restart(&mut self, token: TurnToken, now: Instant) {
        self.deadline = Some(now + self.timeout);
        self.token = Some(token);
    }

    /// Stop the countdown. Nothing expires until the next `restart`.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.token = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left on the clock; zero when expired or stopped.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline
            .map_or(Duration::ZERO, |d| d.saturating_duration_since(now))
    }

    /// Whole seconds left, rounded up, for a countdown display.
    #[must_use]
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let left = self.remaining(now);
        left.as_secs() + u64::from(left.subsec_nanos() > 0)
    }

    /// Report an expiry.
    ///
    /// Returns the token of the expired turn the first time the deadline
    /// is reached and stops the clock, so each expiry is reported at most
    /// once.
    pub fn poll(&mut self, now: Instant) -> Option<TurnToken> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.token.take()
    }
}
