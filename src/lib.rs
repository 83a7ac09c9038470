//! Word Scramble
//!
//! A four-letter word guessing game: a word is fetched from a word service,
//! each guess gets per-letter feedback and the round restarts after a win or
//! after the attempt limit is reached.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{EvaluationMode, Feedback, Guess, TargetWord};
//!
//! let guess = Guess::parse("aabb").unwrap();
//! let target = TargetWord::new("abcd").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target, EvaluationMode::Containment);
//! assert_eq!(feedback.to_string(), "a ? ? ?");
//! ```

// Core domain types
pub mod core;

// Game flow and round controller
pub mod game;

// Word services, retries and background fetching
pub mod source;

// Persisted game state
pub mod state;

// Embedded word list
pub mod wordlists;

// Configuration file
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
