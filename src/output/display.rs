//! Display functions for command results

use super::formatters::{attempts_bar, colored_feedback};
use crate::commands::{CheckResult, StatusReport};
use crate::config::AppConfig;
use crate::game::{GuessReport, RoundOutcome};
use colored::Colorize;

/// Print the result of an offline check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {} ({} rule)",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold(),
        result.mode
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\nFeedback: {}", colored_feedback(&result.feedback));

    if result.is_solved() {
        println!("\n{}", "✅ Exact match".green().bold());
    } else {
        println!(
            "\n{} exact, {} elsewhere",
            result.feedback.count_exact(),
            result.feedback.count_present()
        );
    }
}

/// Print the outcome of one guess in simple mode
pub fn print_guess_report(report: &GuessReport, max_attempts: u32) {
    println!("Feedback: {}", colored_feedback(&report.feedback));
    println!(
        "Attempts: {} [{}]",
        report.attempts,
        attempts_bar(report.attempts, max_attempts)
    );

    if let Some(message) = report.result_message() {
        let styled = match report.outcome {
            RoundOutcome::Won => message.green().bold(),
            _ => message.red().bold(),
        };
        println!("\n{styled}\n");
    }
}

/// Print persisted state and effective configuration
pub fn print_status(report: &StatusReport, config: &AppConfig) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "WORD SCRAMBLE STATUS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!(
        "\n   Attempts:     {}/{}",
        report.attempts.to_string().bright_yellow().bold(),
        config.game.max_attempts
    );
    println!("   Store:        {}", report.location);
    println!("   Evaluation:   {}", config.game.evaluation);
    if config.api.offline {
        println!("   Word source:  offline list");
    } else {
        println!("   Word source:  {}", config.api.base_url);
    }
    println!(
        "   Retries:      up to {} requests",
        config.retry.max_attempts
    );
}
