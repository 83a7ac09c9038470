//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, MessageStyle, Notice, RoundResult, run_tui};
