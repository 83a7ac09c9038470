//! Core domain types for the game
//!
//! Pure types with no I/O: the target word, the player's guess and the
//! per-letter feedback computed from the two.

mod feedback;
mod word;

pub use feedback::{EvaluationMode, Feedback, FeedbackSymbol};
pub use word::{Guess, TargetWord, WORD_LENGTH};
