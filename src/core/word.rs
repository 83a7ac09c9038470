//! Target word and guess representation
//!
//! A `TargetWord` stores a validated 4-letter word along with letter position
//! indices. A `Guess` is whatever the player typed, lowercased and checked
//! only for length.

use crate::error::{GuessError, WordError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every target word and guess
pub const WORD_LENGTH: usize = 4;

/// A 4-letter target word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    chars: [u8; WORD_LENGTH],
    char_positions: FxHashMap<u8, Vec<usize>>,
}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 4 characters
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::TargetWord;
    ///
    /// let word = TargetWord::new("Blue").unwrap();
    /// assert_eq!(word.text(), "blue");
    ///
    /// assert!(TargetWord::new("bluer").is_err());
    /// assert!(TargetWord::new("bl3e").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Count of each letter in the word, used by counted evaluation
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        self.char_positions
            .iter()
            .map(|(&letter, positions)| (letter, positions.len() as u8))
            .collect()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A player's guess, lowercased
///
/// Any four characters are accepted; letters that cannot appear in a target
/// word simply never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    text: String,
    chars: [char; WORD_LENGTH],
}

impl Guess {
    /// Parse raw player input
    ///
    /// # Errors
    /// Returns `GuessError::InvalidLength` unless the lowercased input is
    /// exactly 4 characters long.
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let text = input.to_lowercase();
        let chars: Vec<char> = text.chars().collect();
        let chars: [char; WORD_LENGTH] = chars
            .try_into()
            .map_err(|rejected: Vec<char>| GuessError::InvalidLength(rejected.len()))?;

        Ok(Self { text, chars })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// True when the guess spells the target word
    #[must_use]
    pub fn matches(&self, target: &TargetWord) -> bool {
        self.text == target.text()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
