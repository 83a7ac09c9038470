//! Word sources
//!
//! Obtaining a target word: the raw word service (`api`), the retry loop that
//! insists on a four-letter answer (`word_source`), its backoff policy
//! (`retry`) and the background driver that runs fetches off the UI thread
//! (`fetcher`).

pub mod api;
pub mod fetcher;
pub mod retry;
pub mod word_source;

pub use api::{DEFAULT_BASE_URL, EmbeddedWordApi, HttpWordApi, WordApi, WordProvider};
pub use fetcher::{FetchReport, FetchTicket, Fetcher, WordRequester};
pub use retry::RetryPolicy;
pub use word_source::WordSource;
