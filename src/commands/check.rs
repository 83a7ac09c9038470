//! Offline feedback check
//!
//! Evaluates a guess against a known target without touching game state.

use crate::core::{EvaluationMode, Feedback, Guess, TargetWord};

/// Result of checking a guess
#[derive(Debug)]
pub struct CheckResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
    pub mode: EvaluationMode,
}

impl CheckResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if the guess is not 4 characters or the target is not a
/// 4-letter word.
pub fn check_guess(guess: &str, target: &str, mode: EvaluationMode) -> Result<CheckResult, String> {
    let target = TargetWord::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Guess::parse(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let feedback = Feedback::calculate(&guess, &target, mode);

    Ok(CheckResult {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        feedback,
        mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_feedback() {
        let result = check_guess("BLUE", "blur", EvaluationMode::Containment).unwrap();
        assert_eq!(result.guess, "blue");
        assert_eq!(result.target, "blur");
        assert_eq!(result.feedback.to_string(), "b l u X");
        assert!(!result.is_solved());
    }

    #[test]
    fn check_solved() {
        let result = check_guess("zone", "zone", EvaluationMode::Counted).unwrap();
        assert!(result.is_solved());
    }

    #[test]
    fn check_rejects_bad_input() {
        let err = check_guess("blu", "blur", EvaluationMode::Containment).unwrap_err();
        assert_eq!(err, "Invalid guess: Please enter exactly 4 letters");

        let err = check_guess("blue", "bluer", EvaluationMode::Containment).unwrap_err();
        assert_eq!(err, "Invalid target word: word must be exactly 4 letters, got 5");
    }
}
