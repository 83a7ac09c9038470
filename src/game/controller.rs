//! Round orchestration
//!
//! The controller owns the game state and the word requester. It validates
//! guesses, counts attempts, evaluates feedback and starts a new round when
//! the current one is won or lost.
//!
//! Word fetches are identified by tickets. Only the ticket issued last may
//! commit a word; reports for older tickets are discarded.

use super::rules::{GameRules, RoundOutcome, SessionStats};
use crate::core::{Feedback, Guess, TargetWord};
use crate::error::{FetchError, GuessError};
use crate::source::{FetchReport, FetchTicket, WordRequester};
use crate::state::{GameState, KeyValueStore};

/// Where the controller is in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No target word yet; guesses are rejected
    AwaitingWord,
    /// Target word set, accepting guesses
    AwaitingGuess,
    /// Round decided; a new word is about to be requested
    RoundOver,
}

/// Result of an evaluated guess
#[derive(Debug, Clone)]
pub struct GuessReport {
    pub guess: Guess,
    pub feedback: Feedback,
    /// Attempts used this round, including this guess
    pub attempts: u32,
    pub outcome: RoundOutcome,
    /// The word that was being guessed
    pub target: TargetWord,
}

impl GuessReport {
    /// Round-result text for the player, if the round ended
    #[must_use]
    pub fn result_message(&self) -> Option<String> {
        match self.outcome {
            RoundOutcome::InProgress => None,
            RoundOutcome::Won => Some("You guessed it!".to_string()),
            RoundOutcome::Lost => Some(format!("Game over! The word was: {}", self.target)),
        }
    }
}

/// What happened to a fetch report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// The word became the round's target
    Committed(TargetWord),
    /// The report belonged to a superseded fetch and was discarded
    Stale,
}

/// Game session: one active round at a time
pub struct GameController<S: KeyValueStore, R: WordRequester> {
    state: GameState<S>,
    requester: R,
    rules: GameRules,
    phase: Phase,
    pending: Option<FetchTicket>,
    next_ticket: FetchTicket,
    stats: SessionStats,
}

impl<S: KeyValueStore, R: WordRequester> GameController<S, R> {
    pub const fn new(state: GameState<S>, requester: R, rules: GameRules) -> Self {
        Self {
            state,
            requester,
            rules,
            phase: Phase::AwaitingWord,
            pending: None,
            next_ticket: FetchTicket::FIRST,
            stats: SessionStats::new(),
        }
    }

    /// Restore persisted attempts and request the first word
    ///
    /// Restored attempts carry over into the first round. An unreadable store
    /// or a count that already reaches the limit restores as 0.
    ///
    /// Returns the restored attempt count.
    pub fn start(&mut self) -> u32 {
        let restored = match self.state.load() {
            Ok(attempts) => attempts,
            Err(err) => {
                log::warn!("could not restore attempts, starting from 0: {err}");
                self.state.reset_attempts();
                0
            }
        };

        if restored >= self.rules.max_attempts {
            log::info!(
                "restored {restored} attempts exceeds limit {}; starting fresh",
                self.rules.max_attempts
            );
            self.state.reset_attempts();
            self.persist(true);
        }

        self.issue_fetch();
        self.state.attempts()
    }

    /// Submit raw player input as a guess
    ///
    /// # Errors
    ///
    /// - `GuessError::TargetNotReady` when no word has been loaded yet
    /// - `GuessError::InvalidLength` when the input is not 4 characters
    ///
    /// Rejected guesses leave the round untouched.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessReport, GuessError> {
        let Some(target) = self.state.target().cloned() else {
            return Err(GuessError::TargetNotReady);
        };
        let guess = Guess::parse(input)?;

        let attempts = self.state.increment_attempts();
        let feedback = Feedback::calculate(&guess, &target, self.rules.evaluation);
        let outcome = RoundOutcome::derive(guess.matches(&target), attempts, self.rules.max_attempts);

        log::debug!("guess {attempts}/{}: {guess} -> {feedback}", self.rules.max_attempts);

        if outcome.is_over() {
            self.set_phase(Phase::RoundOver);
            self.stats.record(outcome);
            log::info!("round {outcome:?} after {attempts} attempt(s)");
            self.begin_round();
        } else {
            self.persist(false);
        }

        Ok(GuessReport {
            guess,
            feedback,
            attempts,
            outcome,
            target,
        })
    }

    /// Abandon the current round and start another
    ///
    /// The abandoned round counts as neither won nor lost.
    pub fn new_round(&mut self) -> FetchTicket {
        if self.phase == Phase::AwaitingGuess {
            self.stats.forfeited += 1;
        }
        self.begin_round()
    }

    /// Request the word again after a failed fetch
    ///
    /// Does nothing while a fetch is pending or a word is already loaded.
    pub fn retry_fetch(&mut self) -> Option<FetchTicket> {
        if self.phase == Phase::AwaitingWord && self.pending.is_none() {
            Some(self.issue_fetch())
        } else {
            None
        }
    }

    /// Apply a completed fetch
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the newest fetch failed; the controller
    /// stays in `AwaitingWord` until `retry_fetch` or `new_round`.
    pub fn complete_fetch(&mut self, report: FetchReport) -> Result<FetchStatus, FetchError> {
        if self.pending != Some(report.ticket) {
            log::debug!("discarding stale fetch {}", report.ticket);
            return Ok(FetchStatus::Stale);
        }
        self.pending = None;

        match report.result {
            Ok(word) => {
                log::info!("new word loaded ({})", report.ticket);
                self.state.set_target(word.clone());
                self.set_phase(Phase::AwaitingGuess);
                Ok(FetchStatus::Committed(word))
            }
            Err(err) => {
                log::warn!("fetch {} failed: {err}", report.ticket);
                Err(err)
            }
        }
    }

    /// Reset attempts, persist and request a new word
    fn begin_round(&mut self) -> FetchTicket {
        self.state.reset_attempts();
        self.state.clear_target();
        self.persist(true);
        self.issue_fetch()
    }

    fn issue_fetch(&mut self) -> FetchTicket {
        let ticket = self.next_ticket;
        self.next_ticket = ticket.next();
        self.pending = Some(ticket);
        self.set_phase(Phase::AwaitingWord);
        self.requester.request_word(ticket);
        ticket
    }

    fn persist(&mut self, reset: bool) {
        if let Err(err) = self.state.save(reset) {
            log::warn!("failed to persist attempts: {err}");
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("phase {:?} -> {phase:?}", self.phase);
            self.phase = phase;
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.state.attempts()
    }

    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// True while a word fetch is outstanding
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn state(&self) -> &GameState<S> {
        &self.state
    }

    #[must_use]
    pub const fn requester(&self) -> &R {
        &self.requester
    }
}
