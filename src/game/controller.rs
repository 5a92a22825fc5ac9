//! Match controller.
//!
//! Owns the configuration, RNG, original roster and the live round, and
//! is the one place actions enter the engine. Every accepted action is
//! appended to the match history; every rejected one is logged and
//! returned to the caller untouched.

use im::Vector;

use super::timer::TurnToken;
use crate::core::{
    Action, ActionKind, ActionRecord, GameConfig, GameResult, GameRng, GameRngState, Player,
    PlayerId, RoundState, RoundView,
};
use crate::rules::{self, AccusationOutcome, TurnOutcome};

/// Start a match for `names` with the given configuration and RNG.
pub fn new_match<S: AsRef<str>>(
    names: &[S],
    config: GameConfig,
    rng: GameRng,
) -> GameResult<Match> {
    Match::with_rng(names, config, rng)
}

/// A match from first deal to last survivor.
#[derive(Clone, Debug)]
pub struct Match {
    config: GameConfig,
    rng: GameRng,
    /// Seats as they were at the start, with full lives and empty hands.
    roster: Vec<Player>,
    round: RoundState,
    /// Bumped by every reset.
    game: u32,
    round_number: u32,
    sequence: u32,
    history: Vector<ActionRecord>,
}

impl Match {
    /// Start a match seeded from OS entropy.
    pub fn new<S: AsRef<str>>(names: &[S], config: GameConfig) -> GameResult<Self> {
        Self::with_rng(names, config, GameRng::from_entropy())
    }

    /// Start a reproducible match.
    pub fn with_seed<S: AsRef<str>>(
        names: &[S],
        config: GameConfig,
        seed: u64,
    ) -> GameResult<Self> {
        Self::with_rng(names, config, GameRng::new(seed))
    }

    /// Start a match, seating `names` in order as players 1, 2, ...
    pub fn with_rng<S: AsRef<str>>(
        names: &[S],
        config: GameConfig,
        rng: GameRng,
    ) -> GameResult<Self> {
        config.check_player_count(names.len())?;

        let roster = names
            .iter()
            .zip(PlayerId::seats(names.len()))
            .map(|(name, id)| {
                let name: &str = name.as_ref();
                Player::new(id, name, config.starting_lives)
            })
            .collect();
        Self::from_roster(roster, config, rng)
    }

    /// Start a match from prepared player records.
    ///
    /// Lives are reset to the configured starting lives and hands emptied;
    /// ids, names and the automated flag are kept.
    pub fn from_roster(
        players: Vec<Player>,
        config: GameConfig,
        mut rng: GameRng,
    ) -> GameResult<Self> {
        config.validate()?;
        config.check_player_count(players.len())?;

        let roster: Vec<Player> = players
            .into_iter()
            .map(|mut p| {
                p.lives = config.starting_lives;
                p.hand.clear();
                p
            })
            .collect();

        let mut round = rules::start_round(roster.clone(), &config, &mut rng)?;
        round.last_action = "Game started".to_string();

        tracing::info!(
            players = roster.len(),
            seed = rng.seed(),
            "match started"
        );

        Ok(Self {
            config,
            rng,
            roster,
            round,
            game: 0,
            round_number: 1,
            sequence: 0,
            history: Vector::new(),
        })
    }

    /// Start over with the original roster at full lives.
    ///
    /// The RNG carries on, so the new match gets a fresh deal. Turn tokens
    /// issued before the reset are stale afterwards.
    pub fn reset(&mut self) -> GameResult<()> {
        let mut round = rules::start_round(self.roster.clone(), &self.config, &mut self.rng)?;
        round.last_action = "New game started".to_string();

        self.round = round;
        self.game = self.game.wrapping_add(1);
        self.round_number = 1;
        self.sequence = 0;
        self.history = Vector::new();

        tracing::info!(players = self.roster.len(), game = self.game, "match reset");
        Ok(())
    }

    // === Actions ===

    /// Play the cards at `indices` from the current player's hand.
    pub fn play_cards(&mut self, indices: &[usize]) -> GameResult<TurnOutcome> {
        self.apply(Action::play(indices))
    }

    /// Skip the current player's turn.
    pub fn handle_timeout(&mut self) -> GameResult<TurnOutcome> {
        self.apply(Action::Timeout)
    }

    /// Current player accuses the previous one.
    pub fn resolve_accusation(&mut self) -> GameResult<AccusationOutcome> {
        let actor = self.actor();
        let result = rules::resolve_accusation(&mut self.round, &self.config, &mut self.rng);
        self.commit(actor, Action::Accuse, true, result)
    }

    /// Apply an action for the current player and record it.
    pub fn apply(&mut self, action: Action) -> GameResult<TurnOutcome> {
        let actor = self.actor();
        let result = rules::apply_action(&mut self.round, &action, &self.config, &mut self.rng);
        let ends_round = action.kind() == ActionKind::Accuse;
        self.commit(actor, action, ends_round, result)
    }

    fn actor(&self) -> Option<PlayerId> {
        self.round.current_player().map(|p| p.id)
    }

    /// Log a rejection, or record an accepted action and move the turn
    /// token on.
    fn commit<T>(
        &mut self,
        actor: Option<PlayerId>,
        action: Action,
        ends_round: bool,
        result: GameResult<T>,
    ) -> GameResult<T> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(
                    round = self.round_number,
                    action = ?action.kind(),
                    error = %err,
                    "action rejected"
                );
                return Err(err);
            }
        };

        if let Some(player) = actor {
            self.history.push_back(ActionRecord::new(
                player,
                action,
                self.round_number,
                self.sequence,
            ));
        }

        if ends_round && !self.round.is_over {
            self.round_number += 1;
            self.sequence = 0;
        } else {
            self.sequence += 1;
        }

        Ok(outcome)
    }

    /// Handle a turn-clock expiry reported by the driver.
    ///
    /// Returns `Ok(None)` when `token` belongs to a turn that has already
    /// ended, a round that has been replaced, a game that has been reset, or
    /// a finished match.
    pub fn expire(&mut self, token: TurnToken) -> GameResult<Option<TurnOutcome>> {
        if self.round.is_over || token != self.turn_token() {
            tracing::debug!(?token, current = ?self.turn_token(), "stale expiry ignored");
            return Ok(None);
        }
        self.handle_timeout().map(Some)
    }

    // === Queries ===

    /// The live round.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.round
    }

    /// Render projection of the live round.
    #[must_use]
    pub fn view(&self) -> RoundView {
        self.round.view()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seats this match started with.
    #[must_use]
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// 1-based round counter.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Token for the turn now in progress.
    #[must_use]
    pub fn turn_token(&self) -> TurnToken {
        TurnToken::new(self.game, self.round_number, self.sequence)
    }

    /// Accepted actions since the match (or the last reset) began.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// What the current player may do.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        rules::legal_actions(&self.round)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.round.is_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.round.winner.as_ref()
    }

    /// RNG checkpoint.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
