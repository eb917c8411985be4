// src/extract/fetch.rs
// =============================================================================
// This module downloads the raw text of a page.
//
// Key functionality:
// - One GET request per page, no retries
// - A browser-like User-Agent so servers don't reject us outright
// - A per-request timeout so one dead host can't stall the whole run
// - Transport failures are sorted into a few kinds for nicer messages
//
// The HTTP status is deliberately not checked: a 404 page still has markup,
// and whatever links it contains are scanned like any other page.
//
// Rust concepts:
// - Traits: PageFetcher lets the pipeline run against a fake in tests
// - async fn in traits: The trait method is awaited like any other future
// - thiserror: Derives Display/Error for our error types
// =============================================================================

use reqwest::Client;
use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

/// The identifying header we send with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Why a single page could not be fetched
//
// The pipeline doesn't care which variant it gets (every variant becomes
// an Error section), but the message is what ends up in the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchErrorKind {
    /// The server didn't answer within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// The hostname could not be resolved
    #[error("could not resolve host: {0}")]
    Dns(String),
    /// TCP/TLS connection could not be established (refused, unreachable, ...)
    #[error("connection failed: {0}")]
    Connect(String),
    /// Headers arrived but the body could not be read or decoded
    #[error("failed to read response body: {0}")]
    Body(String),
    /// Anything else (malformed URL, protocol error, ...)
    #[error("{0}")]
    Transport(String),
}

/// A page that could not be retrieved.
#[derive(Debug, Clone, Error)]
#[error("failed to fetch {url}: {kind}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn new(url: impl Into<String>, kind: FetchErrorKind) -> Self {
        Self {
            url: url.into(),
            kind,
        }
    }
}

// Anything that can turn a URL into page text
//
// The real implementation is HttpFetcher. Tests plug in a stub so the
// pipeline can be exercised without a network.
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Settings for the HTTP client
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// Fetches pages with reqwest
//
// The client is built once and reused for every page (connection pooling).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(options: &FetchOptions) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            timeout: options.timeout,
        })
    }

    // Sorts a reqwest error into one of our error kinds
    //
    // reqwest errors can happen for many reasons:
    // - Network timeout
    // - DNS resolution failure
    // - Connection refused / host unreachable
    // - Malformed URL
    fn categorize_error(&self, url: &str, error: &reqwest::Error, reading_body: bool) -> FetchError {
        let failure = if error.is_timeout() {
            Failure::Timeout
        } else if error.is_connect() {
            Failure::Connect
        } else if reading_body || error.is_body() || error.is_decode() {
            Failure::Body
        } else {
            Failure::Other
        };

        FetchError::new(url, classify(failure, error_detail(error), self.timeout))
    }
}

// The coarse failure class reqwest reports, before we look at the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    Timeout,
    Connect,
    Body,
    Other,
}

// Turns a failure class plus its message into an error kind
//
// reqwest has no dedicated DNS flag: a failed lookup is a connect error
// whose message mentions "dns".
fn classify(failure: Failure, detail: String, timeout: Duration) -> FetchErrorKind {
    match failure {
        Failure::Timeout => FetchErrorKind::Timeout(timeout),
        Failure::Connect if detail.to_lowercase().contains("dns") => FetchErrorKind::Dns(detail),
        Failure::Connect => FetchErrorKind::Connect(detail),
        Failure::Body => FetchErrorKind::Body(detail),
        Failure::Other => FetchErrorKind::Transport(detail),
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.categorize_error(url, &e, false))?;

        tracing::debug!(%url, status = response.status().as_u16(), "page response received");

        let body = response
            .text()
            .await
            .map_err(|e| self.categorize_error(url, &e, true))?;

        tracing::debug!(%url, bytes = body.len(), "page body read");
        Ok(body)
    }
}

// Flattens an error and its sources into one line
//
// reqwest often hides the useful part ("Connection refused") a couple of
// levels down the source chain. Sources whose text is already part of the
// message are skipped so nothing is printed twice.
fn error_detail(error: &(dyn StdError + 'static)) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !detail.contains(&text) {
            detail.push_str(": ");
            detail.push_str(&text);
        }
        source = cause.source();
    }

    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_with_timeout(timeout: Duration) -> HttpFetcher {
        HttpFetcher::new(&FetchOptions {
            timeout,
            ..FetchOptions::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/super-mario-bros"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href='x'>x</a>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&FetchOptions::default()).unwrap();
        let body = fetcher
            .fetch(&format!("{}/super-mario-bros", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "<a href='x'>x</a>");
    }

    #[tokio::test]
    async fn test_fetch_keeps_body_of_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"<a href="https://mediafire.com/f">m</a>"#),
            )
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&FetchOptions::default()).unwrap();
        let body = fetcher.fetch(&format!("{}/gone", server.uri())).await.unwrap();

        assert!(body.contains("mediafire.com"));
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_millis(200));
        let err = fetcher.fetch(&format!("{}/slow", server.uri())).await.unwrap_err();

        assert_eq!(err.kind, FetchErrorKind::Timeout(Duration::from_millis(200)));
        assert_eq!(err.kind.to_string(), "request timed out after 200ms");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Grab a free port, then close it again so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = fetcher_with_timeout(Duration::from_secs(5));
        let url = format!("http://{}/page", addr);
        let err = fetcher.fetch(&url).await.unwrap_err();

        assert_eq!(err.url, url);
        assert!(matches!(err.kind, FetchErrorKind::Connect(_)));
        assert!(!err.kind.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_malformed_url() {
        let fetcher = HttpFetcher::new(&FetchOptions::default()).unwrap();
        let err = fetcher.fetch("http//missing-colon").await.unwrap_err();

        assert!(matches!(err.kind, FetchErrorKind::Transport(_)));
    }

    #[tokio::test]
    async fn test_fetch_unresolvable_host_is_dns_error() {
        // .invalid is reserved and never resolves
        let fetcher = fetcher_with_timeout(Duration::from_secs(10));
        let err = fetcher
            .fetch("http://no-such-host.invalid/page")
            .await
            .unwrap_err();

        assert!(matches!(err.kind, FetchErrorKind::Dns(_)), "got {:?}", err.kind);
        assert!(err.kind.to_string().starts_with("could not resolve host: "));
    }

    #[test]
    fn test_classify_connect_errors() {
        let timeout = Duration::from_secs(30);

        assert_eq!(
            classify(
                Failure::Connect,
                "error trying to connect: dns error: failed to lookup address information".to_string(),
                timeout,
            ),
            FetchErrorKind::Dns(
                "error trying to connect: dns error: failed to lookup address information".to_string()
            )
        );
        assert_eq!(
            classify(Failure::Connect, "tcp connect error: Connection refused".to_string(), timeout),
            FetchErrorKind::Connect("tcp connect error: Connection refused".to_string())
        );
    }

    #[test]
    fn test_classify_other_failures() {
        let timeout = Duration::from_secs(7);

        assert_eq!(
            classify(Failure::Timeout, "dns timed out".to_string(), timeout),
            FetchErrorKind::Timeout(timeout)
        );
        assert_eq!(
            classify(Failure::Body, "unexpected EOF".to_string(), timeout),
            FetchErrorKind::Body("unexpected EOF".to_string())
        );
        assert_eq!(
            classify(Failure::Other, "builder error".to_string(), timeout),
            FetchErrorKind::Transport("builder error".to_string())
        );
    }

    #[test]
    fn test_error_detail_skips_repeated_sources() {
        #[derive(Debug, Error)]
        #[error("outer: inner")]
        struct Outer(#[source] Inner);

        #[derive(Debug, Error)]
        #[error("inner")]
        struct Inner;

        assert_eq!(error_detail(&Outer(Inner)), "outer: inner");
    }
}
