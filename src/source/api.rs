//! Raw word services
//!
//! A `WordApi` performs exactly one request and returns the response list
//! untouched. Validation and retries live in `WordSource`.

use crate::core::TargetWord;
use crate::error::FetchError;
use crate::wordlists::{WORDS, loader::words_from_slice};
use rand::seq::IndexedRandom;
use std::future;
use std::time::Duration;

/// Public random-word service
pub const DEFAULT_BASE_URL: &str = "https://random-word-api.herokuapp.com";

/// One request for a random word
pub trait WordApi: Send + Sync {
    /// Request one random word
    ///
    /// Returns the response list as sent by the service; callers only look
    /// at the first element.
    fn request_words(&self) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

/// HTTP word service: `GET {base_url}/word?number=1` answering `["word"]`
pub struct HttpWordApi {
    client: reqwest::Client,
    url: String,
}

impl HttpWordApi {
    /// Create a client for the service at `base_url`
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: Self::word_url(base_url),
        })
    }

    fn word_url(base_url: &str) -> String {
        format!("{}/word?number=1", base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WordApi for HttpWordApi {
    async fn request_words(&self) -> Result<Vec<String>, FetchError> {
        log::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::InvalidResponse(format!("HTTP {status}")));
        }

        let words: Vec<String> = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;
        Ok(words)
    }
}

/// Offline word service drawing from a fixed list
pub struct EmbeddedWordApi {
    words: Vec<TargetWord>,
}

impl EmbeddedWordApi {
    #[must_use]
    pub const fn new(words: Vec<TargetWord>) -> Self {
        Self { words }
    }

    /// Service backed by the list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordApi for EmbeddedWordApi {
    fn request_words(&self) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send {
        let pick = self
            .words
            .choose(&mut rand::rng())
            .map(|word| word.text().to_string());
        future::ready(Ok(pick.into_iter().collect()))
    }
}

/// Enum wrapper for all word services
///
/// Allows runtime selection of the service while keeping static dispatch.
pub enum WordProvider {
    /// Remote HTTP service (default)
    Http(HttpWordApi),
    /// Embedded list for offline play
    Embedded(EmbeddedWordApi),
}

impl WordApi for WordProvider {
    async fn request_words(&self) -> Result<Vec<String>, FetchError> {
        match self {
            Self::Http(api) => api.request_words().await,
            Self::Embedded(api) => api.request_words().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RetryPolicy, WordSource};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Answer a single HTTP request with a canned response
    ///
    /// Returns the base URL to request and the request line that was received.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (request_tx, request_rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = request_tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        (base_url, request_rx)
    }

    fn http_api(base_url: &str) -> HttpWordApi {
        HttpWordApi::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn http_api_decodes_word_list() {
        let (base_url, request) = serve_once("200 OK", r#"["BLUE"]"#).await;
        let words = http_api(&base_url).request_words().await.unwrap();

        assert_eq!(words, ["BLUE"]);
        assert_eq!(request.await.unwrap(), "GET /word?number=1 HTTP/1.1");
    }

    #[tokio::test]
    async fn http_word_is_lowercased_by_source() {
        let (base_url, _request) = serve_once("200 OK", r#"["BLUE"]"#).await;
        let source = WordSource::new(http_api(&base_url), RetryPolicy::default());

        assert_eq!(source.fetch_word().await.unwrap().text(), "blue");
    }

    #[tokio::test]
    async fn http_error_status_is_invalid_response() {
        let (base_url, _request) = serve_once("503 Service Unavailable", "").await;
        let err = http_api(&base_url).request_words().await.unwrap_err();

        let FetchError::InvalidResponse(ref detail) = err else {
            panic!("expected InvalidResponse, got {err:?}");
        };
        assert!(detail.starts_with("HTTP 503"), "{detail}");
        assert_eq!(err.notice(), "Failed to load word");
    }

    #[tokio::test]
    async fn http_empty_list_fails_the_fetch() {
        let (base_url, _request) = serve_once("200 OK", "[]").await;
        let source = WordSource::new(http_api(&base_url), RetryPolicy::default());

        assert_eq!(
            source.fetch_word().await.unwrap_err(),
            FetchError::InvalidResponse("empty word list".to_string())
        );
    }

    #[tokio::test]
    async fn http_malformed_body_is_invalid_response() {
        let (base_url, _request) = serve_once("200 OK", r#"{"w":1}"#).await;
        let err = http_api(&base_url).request_words().await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidResponse(_)), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_service_is_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = http_api(&base_url).request_words().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "{err:?}");
        assert_eq!(err.notice(), "Error fetching word");
    }

    #[test]
    fn word_url_appends_query() {
        assert_eq!(
            HttpWordApi::word_url(DEFAULT_BASE_URL),
            "https://random-word-api.herokuapp.com/word?number=1"
        );
        assert_eq!(
            HttpWordApi::word_url("http://localhost:8080/"),
            "http://localhost:8080/word?number=1"
        );
    }

    #[tokio::test]
    async fn embedded_api_returns_one_listed_word() {
        let api = EmbeddedWordApi::embedded();
        assert!(!api.is_empty());

        let words = api.request_words().await.unwrap();
        assert_eq!(words.len(), 1);
        assert!(WORDS.contains(&words[0].as_str()));
    }

    #[tokio::test]
    async fn empty_embedded_api_returns_empty_list() {
        let api = EmbeddedWordApi::new(Vec::new());
        assert!(api.request_words().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_dispatches_to_embedded() {
        let word = TargetWord::new("zone").unwrap();
        let provider = WordProvider::Embedded(EmbeddedWordApi::new(vec![word]));
        assert_eq!(provider.request_words().await.unwrap(), ["zone"]);
    }
}
