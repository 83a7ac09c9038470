//! Game flow: rules, outcomes and the round controller

mod controller;
mod rules;

pub use controller::{FetchStatus, GameController, GuessReport, Phase};
pub use rules::{DEFAULT_MAX_ATTEMPTS, GameRules, RoundOutcome, SessionStats};
