//! Round rules and outcomes

use crate::config::GameConfig;
use crate::core::EvaluationMode;

/// Attempts allowed per round unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Rules applied to every round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub max_attempts: u32,
    pub evaluation: EvaluationMode,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            evaluation: EvaluationMode::Containment,
        }
    }
}

impl From<&GameConfig> for GameRules {
    fn from(config: &GameConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            evaluation: config.evaluation,
        }
    }
}

/// Outcome of a round, derived after each guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

impl RoundOutcome {
    /// Derive the outcome from the latest guess
    ///
    /// A correct guess wins even on the last attempt.
    #[must_use]
    pub const fn derive(solved: bool, attempts: u32, max_attempts: u32) -> Self {
        if solved {
            Self::Won
        } else if attempts >= max_attempts {
            Self::Lost
        } else {
            Self::InProgress
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Rounds decided in this process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub forfeited: u32,
}

impl SessionStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rounds_won: 0,
            rounds_lost: 0,
            forfeited: 0,
        }
    }

    pub const fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won => self.rounds_won += 1,
            RoundOutcome::Lost => self.rounds_lost += 1,
            RoundOutcome::InProgress => {}
        }
    }

    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_won + self.rounds_lost
    }

    /// Win percentage over decided rounds
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let played = self.rounds_played();
        if played == 0 {
            0.0
        } else {
            f64::from(self.rounds_won) / f64::from(played) * 100.0
        }
    }
}
