//! HTTP client abstraction for testability
//!
//! The trait deliberately returns the HTTP status code together with the
//! body instead of failing on non-2xx responses: node servers deliver
//! error envelopes with HTTP 500, and the envelope layer needs the body
//! to recover the server's message.

use super::error::ClientError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// A completed HTTP exchange: status code plus raw body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Trait for asynchronous HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests. Only transport failures are
/// errors; any response that arrived is returned as an [`HttpResponse`].
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, ClientError>> + Send;

    /// Performs an HTTP PUT request with an optional raw JSON body.
    fn put(
        &self,
        url: &str,
        body: Option<String>,
    ) -> impl Future<Output = Result<HttpResponse, ClientError>> + Send;

    /// Performs an HTTP POST request with a raw JSON body.
    ///
    /// The body is sent byte-for-byte as given; no validation happens on
    /// the client side.
    fn post(
        &self,
        url: &str,
        body: String,
    ) -> impl Future<Output = Result<HttpResponse, ClientError>> + Send;

    /// Performs an HTTP DELETE request.
    fn delete(&self, url: &str) -> impl Future<Output = Result<HttpResponse, ClientError>> + Send;
}

/// Default User-Agent string for HTTP requests.
const DEFAULT_USER_AGENT: &str = concat!("flowdeck/", env!("CARGO_PKG_VERSION"));

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with the default 10 second timeout.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_timeout(10)
    }

    /// Creates a new ReqwestClient with a custom timeout.
    ///
    /// A timeout of 0 disables the request timeout entirely.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(DEFAULT_USER_AGENT);
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        let client = builder.build().map_err(|e| {
            ClientError::Transport(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }

    async fn execute(&self, request: reqwest::RequestBuilder, url: &str) -> Result<HttpResponse, ClientError> {
        let response = match request.send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(ClientError::Transport(format!("Request failed: {}", e)));
            }
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(HttpResponse {
                    status,
                    body: bytes.to_vec(),
                })
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(ClientError::Transport(format!(
                    "Failed to read response: {}",
                    e
                )))
            }
        }
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
        trace!(url = url, "HTTP GET request starting");
        self.execute(self.client.get(url), url).await
    }

    async fn put(&self, url: &str, body: Option<String>) -> Result<HttpResponse, ClientError> {
        trace!(url = url, "HTTP PUT request starting");
        let mut request = self
            .client
            .put(url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }
        self.execute(request, url).await
    }

    async fn post(&self, url: &str, body: String) -> Result<HttpResponse, ClientError> {
        trace!(url = url, "HTTP POST request starting");
        let request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body);
        self.execute(request, url).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse, ClientError> {
        trace!(url = url, "HTTP DELETE request starting");
        self.execute(self.client.delete(url), url).await
    }
}
