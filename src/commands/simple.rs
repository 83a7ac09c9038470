//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::error::FetchError;
use crate::game::{FetchStatus, GameController, Phase};
use crate::output::print_guess_report;
use crate::source::{FetchReport, WordRequester};
use crate::state::KeyValueStore;
use colored::Colorize;
use indicatif::ProgressBar;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

/// Run the simple interactive CLI mode
///
/// Blocks on `reports` while a word is being fetched, so it must not be
/// called from inside the tokio runtime.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// word fetcher shuts down.
pub fn run_simple<S: KeyValueStore, R: WordRequester>(
    controller: &mut GameController<S, R>,
    reports: &mut UnboundedReceiver<FetchReport>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║             Word Scramble - Simple Mode          ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    let max_attempts = controller.rules().max_attempts;
    println!("Guess the four-letter word in {max_attempts} attempts.");
    println!("Feedback shows the letter when it is in the right place,");
    println!("'?' when it is elsewhere in the word and 'X' when it is not.\n");
    println!("Commands: ':quit' to exit, ':new' for a new word, ':retry' after a failed fetch\n");

    let restored = controller.start();
    if restored > 0 {
        println!("Restored {restored} attempt(s) from the last session.\n");
    }

    loop {
        while let Ok(report) = reports.try_recv() {
            handle_report(controller, report);
        }

        if controller.phase() == Phase::AwaitingWord && controller.is_fetching() {
            let spinner = ProgressBar::new_spinner();
            spinner.enable_steady_tick(Duration::from_millis(80));
            spinner.set_message("Fetching a word...");

            let report = reports.blocking_recv();
            spinner.finish_and_clear();

            let report = report.ok_or("Word fetcher stopped")?;
            handle_report(controller, report);
            continue;
        }

        let prompt = if controller.phase() == Phase::AwaitingGuess {
            format!("Guess ({}/{max_attempts} used)", controller.attempts())
        } else {
            "Command".to_string()
        };

        let Some(input) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => {
                controller.new_round();
                println!("\n🔄 New round started!\n");
            }
            ":retry" | ":r" => {
                if controller.retry_fetch().is_none() {
                    println!("Nothing to retry.\n");
                }
            }
            _ => match controller.submit_guess(&input) {
                Ok(report) => print_guess_report(&report, max_attempts),
                Err(err) => println!("{}", format!("❌ {err}").red()),
            },
        }
    }
}

fn handle_report<S: KeyValueStore, R: WordRequester>(
    controller: &mut GameController<S, R>,
    report: FetchReport,
) {
    match controller.complete_fetch(report) {
        Ok(FetchStatus::Committed(_)) => {
            println!("{}", "✓ New word loaded. Start guessing!".green());
        }
        Ok(FetchStatus::Stale) => {}
        Err(err) => print_fetch_error(&err),
    }
}

fn print_fetch_error(err: &FetchError) {
    println!("{}", format!("❌ {}", err.notice()).red().bold());
    println!("Type ':retry' to try again.\n");
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
