//! Four-letter word fetching with bounded retries

use super::api::WordApi;
use super::retry::RetryPolicy;
use crate::core::TargetWord;
use crate::error::FetchError;

/// Produces target words from a `WordApi`
///
/// Answers that are not four ASCII letters are requested again under the
/// retry policy. Network failures and empty responses are returned as-is.
pub struct WordSource<A: WordApi> {
    api: A,
    policy: RetryPolicy,
}

impl<A: WordApi> WordSource<A> {
    pub const fn new(api: A, policy: RetryPolicy) -> Self {
        Self { api, policy }
    }

    /// Fetch one four-letter target word
    ///
    /// # Errors
    ///
    /// - `FetchError::Network` when a request fails; not retried
    /// - `FetchError::InvalidResponse` when the service answers with an error
    ///   status or an empty list; not retried
    /// - `FetchError::RetriesExhausted` when every allowed request produced
    ///   a word of the wrong shape
    pub async fn fetch_word(&self) -> Result<TargetWord, FetchError> {
        let mut requests = 0u32;

        loop {
            requests += 1;
            let words = self.api.request_words().await?;

            let Some(candidate) = words.into_iter().next() else {
                return Err(FetchError::InvalidResponse("empty word list".to_string()));
            };

            match TargetWord::new(candidate.as_str()) {
                Ok(word) => {
                    log::debug!("accepted word after {requests} request(s)");
                    return Ok(word);
                }
                Err(err) if self.policy.allows_retry(requests) => {
                    let delay = self.policy.backoff(requests);
                    log::debug!("rejected {candidate:?} ({err}); retrying in {delay:?}");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    log::warn!("giving up after {requests} request(s); last answer {candidate:?} ({err})");
                    return Err(FetchError::RetriesExhausted { attempts: requests });
                }
            }
        }
    }
}
