//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{FetchStatus, GameController, GuessReport, Phase, RoundOutcome};
use crate::source::{FetchReport, WordRequester};
use crate::state::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;

/// How often the event loop wakes up to collect fetch reports
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App<S: KeyValueStore, R: WordRequester> {
    pub controller: GameController<S, R>,
    pub input_buffer: String,
    pub last_guess: Option<GuessReport>,
    pub result: Option<RoundResult>,
    pub notices: Vec<Notice>,
    pub notice_ttl: Duration,
    pub should_quit: bool,
}

/// Round-result text shown until the next guess
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub text: String,
    pub outcome: RoundOutcome,
}

/// Transient notification
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub style: MessageStyle,
    pub raised: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: KeyValueStore, R: WordRequester> App<S, R> {
    #[must_use]
    pub const fn new(controller: GameController<S, R>, notice_ttl: Duration) -> Self {
        Self {
            controller,
            input_buffer: String::new(),
            last_guess: None,
            result: None,
            notices: Vec::new(),
            notice_ttl,
            should_quit: false,
        }
    }

    /// Restore attempts and request the first word
    pub fn start(&mut self) {
        let restored = self.controller.start();
        if restored > 0 {
            self.notify(
                &format!("Restored {restored} attempt(s) from the last session"),
                MessageStyle::Info,
            );
        }
    }

    /// Append a typed character; input is capped at four characters
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() && self.input_buffer.chars().count() < WORD_LENGTH {
            self.input_buffer.push(c);
        }
    }

    pub fn submit(&mut self) {
        match self.controller.submit_guess(&self.input_buffer) {
            Ok(report) => {
                self.input_buffer.clear();
                self.result = report.result_message().map(|text| RoundResult {
                    text,
                    outcome: report.outcome,
                });
                self.last_guess = Some(report);
            }
            Err(err) => self.notify(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_fetch_report(&mut self, report: FetchReport) {
        match self.controller.complete_fetch(report) {
            Ok(FetchStatus::Committed(_)) => {
                self.notify("New word loaded. Start guessing!", MessageStyle::Success);
            }
            Ok(FetchStatus::Stale) => {}
            Err(err) => {
                self.notify(err.notice(), MessageStyle::Error);
                self.notify("Press Ctrl-R to try again", MessageStyle::Info);
            }
        }
    }

    pub fn new_round(&mut self) {
        self.controller.new_round();
        self.input_buffer.clear();
        self.last_guess = None;
        self.result = None;
        self.notify("New round started", MessageStyle::Info);
    }

    pub fn retry_fetch(&mut self) {
        if self.controller.retry_fetch().is_some() {
            self.notify("Fetching a new word...", MessageStyle::Info);
        }
    }

    pub fn notify(&mut self, text: &str, style: MessageStyle) {
        self.notices.push(Notice {
            text: text.to_string(),
            style,
            raised: Instant::now(),
        });

        // Keep only last 5 notices
        if self.notices.len() > 5 {
            self.notices.remove(0);
        }
    }

    /// Drop notices older than the configured lifetime
    pub fn expire_notices(&mut self, now: Instant) {
        let ttl = self.notice_ttl;
        self.notices
            .retain(|notice| now.saturating_duration_since(notice.raised) < ttl);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(),
            KeyCode::Char('r') if ctrl => self.retry_fetch(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if !ctrl => self.push_char(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Short description of where the round stands
    #[must_use]
    pub fn phase_label(&self) -> &'static str {
        match self.controller.phase() {
            Phase::AwaitingWord if self.controller.is_fetching() => "Loading word...",
            Phase::AwaitingWord => "No word loaded",
            Phase::AwaitingGuess => "Guessing",
            Phase::RoundOver => "Round over",
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, R: WordRequester>(
    app: App<S, R>,
    reports: UnboundedReceiver<FetchReport>,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, reports);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore, R: WordRequester>(
    terminal: &mut Terminal<B>,
    mut app: App<S, R>,
    mut reports: UnboundedReceiver<FetchReport>,
) -> Result<()> {
    app.start();

    loop {
        while let Ok(report) = reports.try_recv() {
            app.handle_fetch_report(report);
        }
        app.expire_notices(Instant::now());

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
