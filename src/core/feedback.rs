//! Per-letter feedback for a guess
//!
//! Every position of a guess gets one symbol:
//! - the letter itself when it sits in the right position
//! - `?` when the letter appears elsewhere in the target
//! - `X` when the letter does not appear in the target
//!
//! The default rule checks containment per position and ignores how many
//! times a letter occurs, so `aabb` against `abcd` reports `a ? ? ?`.

use super::word::{Guess, TargetWord, WORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSymbol {
    /// Right letter, right position
    Exact(char),
    /// Letter appears elsewhere in the target
    Present,
    /// Letter not in the target
    Absent,
}

impl FeedbackSymbol {
    pub const PRESENT_MARKER: char = '?';
    pub const ABSENT_MARKER: char = 'X';

    /// Character shown to the player for this symbol
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Exact(letter) => letter,
            Self::Present => Self::PRESENT_MARKER,
            Self::Absent => Self::ABSENT_MARKER,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

impl fmt::Display for FeedbackSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Rule used to mark letters that are in the target but misplaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    /// Per-position containment check, letter multiplicity ignored
    #[default]
    Containment,
    /// Wordle rule: each target letter can be claimed once
    Counted,
}

impl EvaluationMode {
    /// Create a mode from its name ("containment" or "counted")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "containment" | "naive" => Some(Self::Containment),
            "counted" | "wordle" => Some(Self::Counted),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Containment => "containment",
            Self::Counted => "counted",
        }
    }
}

impl FromStr for EvaluationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown evaluation mode: {s}"))
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Feedback for a whole guess, one symbol per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackSymbol; WORD_LENGTH]);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{EvaluationMode, Feedback, Guess, TargetWord};
    ///
    /// let guess = Guess::parse("blue").unwrap();
    /// let target = TargetWord::new("blur").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target, EvaluationMode::Containment);
    ///
    /// assert_eq!(feedback.to_string(), "b l u X");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Guess, target: &TargetWord, mode: EvaluationMode) -> Self {
        match mode {
            EvaluationMode::Containment => Self::containment(guess, target),
            EvaluationMode::Counted => Self::counted(guess, target),
        }
    }

    fn containment(guess: &Guess, target: &TargetWord) -> Self {
        let mut result = [FeedbackSymbol::Absent; WORD_LENGTH];

        for (i, &letter) in guess.chars().iter().enumerate() {
            result[i] = match target_letter(letter) {
                Some(byte) if byte == target.char_at(i) => FeedbackSymbol::Exact(letter),
                Some(byte) if target.has_letter(byte) => FeedbackSymbol::Present,
                _ => FeedbackSymbol::Absent,
            };
        }

        Self(result)
    }

    fn counted(guess: &Guess, target: &TargetWord) -> Self {
        let mut result = [FeedbackSymbol::Absent; WORD_LENGTH];
        let mut available = target.char_counts();

        // First pass: exact matches claim their letter
        for (i, &letter) in guess.chars().iter().enumerate() {
            if let Some(byte) = target_letter(letter)
                && byte == target.char_at(i)
            {
                result[i] = FeedbackSymbol::Exact(letter);
                if let Some(count) = available.get_mut(&byte) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters take whatever is left
        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i].is_exact() {
                continue;
            }
            if let Some(byte) = target_letter(letter)
                && let Some(count) = available.get_mut(&byte)
                && *count > 0
            {
                result[i] = FeedbackSymbol::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[FeedbackSymbol; WORD_LENGTH] {
        &self.0
    }

    /// True when every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|symbol| symbol.is_exact())
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|symbol| symbol.is_exact()).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&symbol| symbol == FeedbackSymbol::Present)
            .count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Byte form of a guess letter, if it could appear in a target word
fn target_letter(letter: char) -> Option<u8> {
    u8::try_from(letter).ok().filter(u8::is_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(guess: &str, target: &str, mode: EvaluationMode) -> Feedback {
        let guess = Guess::parse(guess).unwrap();
        let target = TargetWord::new(target).unwrap();
        Feedback::calculate(&guess, &target, mode)
    }

    fn render(feedback: &Feedback) -> Vec<String> {
        feedback.symbols().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn exact_present_and_absent() {
        let feedback = evaluate("blue", "blur", EvaluationMode::Containment);
        assert_eq!(render(&feedback), ["b", "l", "u", "X"]);
        assert_eq!(feedback.count_exact(), 3);
        assert_eq!(feedback.count_present(), 0);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn containment_ignores_letter_multiplicity() {
        let feedback = evaluate("aabb", "abcd", EvaluationMode::Containment);
        assert_eq!(render(&feedback), ["a", "?", "?", "?"]);
    }

    #[test]
    fn counted_claims_each_target_letter_once() {
        let feedback = evaluate("aabb", "abcd", EvaluationMode::Counted);
        assert_eq!(render(&feedback), ["a", "X", "?", "X"]);
    }

    #[test]
    fn counted_credits_repeated_letter_once() {
        // "robe" has one 'o', so only the first misplaced 'o' is credited
        let feedback = evaluate("oboe", "robe", EvaluationMode::Counted);
        assert_eq!(render(&feedback), ["?", "?", "X", "e"]);

        let naive = evaluate("oboe", "robe", EvaluationMode::Containment);
        assert_eq!(render(&naive), ["?", "?", "?", "e"]);
    }

    #[test]
    fn counted_exact_match_takes_priority() {
        // The exact 'o' at position 2 claims the only 'o' before position 0 can
        let feedback = evaluate("oxox", "bzoy", EvaluationMode::Counted);
        assert_eq!(render(&feedback), ["X", "X", "o", "X"]);
    }

    #[test]
    fn target_against_itself_is_all_exact() {
        for word in ["blue", "book", "aaaa", "zone"] {
            for mode in [EvaluationMode::Containment, EvaluationMode::Counted] {
                let feedback = evaluate(word, word, mode);
                assert!(feedback.is_solved(), "{word} ({mode})");
                assert_eq!(feedback.count_exact(), WORD_LENGTH);
            }
        }
    }

    #[test]
    fn feedback_always_has_four_symbols() {
        for (guess, target) in [("abcd", "efgh"), ("zzzz", "fizz"), ("ab1!", "able")] {
            let feedback = evaluate(guess, target, EvaluationMode::Containment);
            assert_eq!(feedback.symbols().len(), WORD_LENGTH);
        }
    }

    #[test]
    fn all_absent() {
        let feedback = evaluate("zzzz", "blue", EvaluationMode::Containment);
        assert_eq!(feedback.to_string(), "X X X X");
    }

    #[test]
    fn non_letters_never_match() {
        let feedback = evaluate("ab1!", "able", EvaluationMode::Containment);
        assert_eq!(render(&feedback), ["a", "b", "X", "X"]);
    }

    #[test]
    fn uppercase_guess_is_normalized() {
        let feedback = evaluate("BLUE", "blue", EvaluationMode::Containment);
        assert!(feedback.is_solved());
        assert_eq!(feedback.to_string(), "b l u e");
    }

    #[test]
    fn evaluation_mode_from_name() {
        assert_eq!(
            EvaluationMode::from_name("containment"),
            Some(EvaluationMode::Containment)
        );
        assert_eq!(
            EvaluationMode::from_name("COUNTED"),
            Some(EvaluationMode::Counted)
        );
        assert_eq!(EvaluationMode::from_name("fuzzy"), None);
        assert!("fuzzy".parse::<EvaluationMode>().is_err());
        assert_eq!(EvaluationMode::default(), EvaluationMode::Containment);
    }
}
