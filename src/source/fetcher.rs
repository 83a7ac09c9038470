//! Background word fetching
//!
//! Fetches run as tokio tasks; their results travel back to the UI thread
//! over a channel, tagged with the ticket they were issued under. Issuing a
//! new ticket aborts whatever fetch is still running.

use super::api::WordApi;
use super::word_source::WordSource;
use crate::core::TargetWord;
use crate::error::FetchError;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Generation number of a word fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    /// Ticket handed out first
    pub const FIRST: Self = Self(1);

    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Completion of one fetch
#[derive(Debug)]
pub struct FetchReport {
    pub ticket: FetchTicket,
    pub result: Result<TargetWord, FetchError>,
}

/// Something that can start a word fetch for a ticket
pub trait WordRequester {
    fn request_word(&mut self, ticket: FetchTicket);
}

/// Runs `WordSource` fetches on a tokio runtime
pub struct Fetcher<A: WordApi + 'static> {
    source: Arc<WordSource<A>>,
    runtime: Handle,
    reports: UnboundedSender<FetchReport>,
    in_flight: Option<JoinHandle<()>>,
}

impl<A: WordApi + 'static> Fetcher<A> {
    /// Create a fetcher and the receiver its reports arrive on
    #[must_use]
    pub fn new(source: WordSource<A>, runtime: Handle) -> (Self, UnboundedReceiver<FetchReport>) {
        let (reports, receiver) = mpsc::unbounded_channel();
        let fetcher = Self {
            source: Arc::new(source),
            runtime,
            reports,
            in_flight: None,
        };
        (fetcher, receiver)
    }

    /// Start a fetch for `ticket`, aborting any fetch still running
    pub fn issue(&mut self, ticket: FetchTicket) {
        self.cancel();

        let source = Arc::clone(&self.source);
        let reports = self.reports.clone();

        log::debug!("fetch {ticket} started");
        self.in_flight = Some(self.runtime.spawn(async move {
            let result = source.fetch_word().await;
            if reports.send(FetchReport { ticket, result }).is_err() {
                log::debug!("fetch {ticket} finished after the front-end closed");
            }
        }));
    }

    /// Abort the running fetch, if any
    pub fn cancel(&mut self) {
        if let Some(task) = self.in_flight.take()
            && !task.is_finished()
        {
            log::debug!("aborting superseded fetch");
            task.abort();
        }
    }
}

impl<A: WordApi + 'static> WordRequester for Fetcher<A> {
    fn request_word(&mut self, ticket: FetchTicket) {
        self.issue(ticket);
    }
}

impl<A: WordApi + 'static> Drop for Fetcher<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{EmbeddedWordApi, RetryPolicy};
    use tokio::sync::mpsc::error::TryRecvError;

    fn fetcher() -> (Fetcher<EmbeddedWordApi>, UnboundedReceiver<FetchReport>) {
        let source = WordSource::new(EmbeddedWordApi::embedded(), RetryPolicy::default());
        Fetcher::new(source, Handle::current())
    }

    #[test]
    fn tickets_increase() {
        assert_eq!(FetchTicket::FIRST.next(), FetchTicket::new(2));
        assert!(FetchTicket::FIRST < FetchTicket::FIRST.next());
        assert_eq!(FetchTicket::new(7).to_string(), "#7");
    }

    #[tokio::test]
    async fn report_carries_ticket_and_word() {
        let (mut fetcher, mut reports) = fetcher();
        fetcher.request_word(FetchTicket::new(3));

        let report = reports.recv().await.unwrap();
        assert_eq!(report.ticket, FetchTicket::new(3));
        assert_eq!(report.result.unwrap().text().len(), 4);
    }

    #[tokio::test]
    async fn new_ticket_aborts_pending_fetch() {
        let (mut fetcher, mut reports) = fetcher();

        // The single-threaded test runtime has not polled the first task yet
        fetcher.issue(FetchTicket::new(1));
        fetcher.issue(FetchTicket::new(2));

        let report = reports.recv().await.unwrap();
        assert_eq!(report.ticket, FetchTicket::new(2));

        tokio::task::yield_now().await;
        assert!(matches!(reports.try_recv(), Err(TryRecvError::Empty)));
    }
}
