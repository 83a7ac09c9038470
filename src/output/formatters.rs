//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackSymbol};
use colored::{ColoredString, Colorize};

/// Colour a single feedback symbol
#[must_use]
pub fn colored_symbol(symbol: FeedbackSymbol) -> ColoredString {
    let text = symbol.to_string();
    match symbol {
        FeedbackSymbol::Exact(_) => text.bright_green().bold(),
        FeedbackSymbol::Present => text.bright_yellow().bold(),
        FeedbackSymbol::Absent => text.bright_black(),
    }
}

/// Format feedback as coloured symbols separated by spaces
#[must_use]
pub fn colored_feedback(feedback: &Feedback) -> String {
    feedback
        .symbols()
        .iter()
        .map(|&symbol| colored_symbol(symbol).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Width of the attempts bar, whatever the attempt limit
pub const ATTEMPTS_BAR_WIDTH: usize = 10;

/// Attempts used out of the limit, as a bar
#[must_use]
pub fn attempts_bar(used: u32, max: u32) -> String {
    create_progress_bar(f64::from(used), f64::from(max), ATTEMPTS_BAR_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn attempts_bar_scales_to_limit() {
        assert_eq!(attempts_bar(2, 5), "████░░░░░░");
        assert_eq!(attempts_bar(7, 5), "██████████");
    }

    #[test]
    fn attempts_bar_width_is_fixed() {
        assert_eq!(attempts_bar(1, 4_000_000_000).chars().count(), ATTEMPTS_BAR_WIDTH);
        assert_eq!(attempts_bar(1, 1).chars().count(), ATTEMPTS_BAR_WIDTH);
    }

    #[test]
    fn colored_feedback_keeps_symbols() {
        colored::control::set_override(false);
        let guess = crate::core::Guess::parse("blue").unwrap();
        let target = crate::core::TargetWord::new("blur").unwrap();
        let feedback =
            Feedback::calculate(&guess, &target, crate::core::EvaluationMode::Containment);
        assert_eq!(colored_feedback(&feedback), "b l u X");
    }
}
