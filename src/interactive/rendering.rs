//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::FeedbackSymbol;
use crate::game::RoundOutcome;
use crate::source::WordRequester;
use crate::state::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore, R: WordRequester>(f: &mut Frame, app: &App<S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Round panel
            Constraint::Percentage(40), // Notices
        ])
        .split(chunks[1]);

    render_round_panel(f, app, main_chunks[0]);
    render_notices(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD SCRAMBLE - Guess the four-letter word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_round_panel<S: KeyValueStore, R: WordRequester>(
    f: &mut Frame,
    app: &App<S, R>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Feedback
            Constraint::Length(3), // Attempts
            Constraint::Min(3),    // Result
        ])
        .split(area);

    render_feedback(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_result(f, app, chunks[2]);
}

fn symbol_style(symbol: FeedbackSymbol) -> Style {
    match symbol {
        FeedbackSymbol::Exact(_) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        FeedbackSymbol::Present => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        FeedbackSymbol::Absent => Style::default().fg(Color::DarkGray),
    }
}

fn render_feedback<S: KeyValueStore, R: WordRequester>(
    f: &mut Frame,
    app: &App<S, R>,
    area: Rect,
) {
    let content = if let Some(ref report) = app.last_guess {
        let mut symbols = vec![Span::raw("Feedback: ")];
        for &symbol in report.feedback.symbols() {
            symbols.push(Span::styled(symbol.to_string(), symbol_style(symbol)));
            symbols.push(Span::raw(" "));
        }

        vec![
            Line::from(vec![
                Span::raw("Guess:    "),
                Span::styled(
                    report.guess.text().to_uppercase(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(symbols),
        ]
    } else {
        vec![Line::from("No guesses yet")]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Feedback ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_attempts<S: KeyValueStore, R: WordRequester>(
    f: &mut Frame,
    app: &App<S, R>,
    area: Rect,
) {
    let attempts = app.controller.attempts();
    let max_attempts = app.controller.rules().max_attempts;
    let percent = (u64::from(attempts) * 100 / u64::from(max_attempts.max(1))).min(100) as u16;

    let color = if attempts + 1 >= max_attempts {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("Attempts: {attempts}/{max_attempts}"));

    f.render_widget(gauge, area);
}

fn render_result<S: KeyValueStore, R: WordRequester>(
    f: &mut Frame,
    app: &App<S, R>,
    area: Rect,
) {
    let (text, style) = match app.result {
        Some(ref result) => {
            let color = match result.outcome {
                RoundOutcome::Won => Color::Green,
                _ => Color::Red,
            };
            (
                result.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (
            app.phase_label().to_string(),
            Style::default().fg(Color::Gray),
        ),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_notices<S: KeyValueStore, R: WordRequester>(
    f: &mut Frame,
    app: &App<S, R>,
    area: Rect,
) {
    let notices: Vec<ListItem> = app
        .notices
        .iter()
        .rev()
        .map(|notice| {
            let style = match notice.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(notice.text.clone()).style(style)
        })
        .collect();

    let list =
        List::new(notices).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_input<S: KeyValueStore, R: WordRequester>(
    f: &mut Frame,
    app: &App<S, R>,
    area: Rect,
) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Your Guess (4 letters) | Enter to submit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status<S: KeyValueStore, R: WordRequester>(
    f: &mut Frame,
    app: &App<S, R>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let phase = Paragraph::new(app.phase_label()).alignment(Alignment::Center);
    f.render_widget(phase, chunks[0]);

    let stats = app.controller.stats();
    let stats_text = format!(
        "Won: {} | Lost: {} | Win Rate: {:.0}%",
        stats.rounds_won,
        stats.rounds_lost,
        stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Word | Ctrl-R: Retry Fetch")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
