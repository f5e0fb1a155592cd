//! Node control client.
//!
//! [`NodeClient`] issues control requests against a node's REST interface
//! and normalizes the `{status, data|message}` envelopes into typed
//! results. It is generic over the HTTP transport for dependency
//! injection, and parameterized by [`ApiLayout`] so one client serves
//! both the plain and the namespaced deployment shape.
//!
//! Every operation is a single request: no retries, no queuing. Failures
//! are returned as [`ClientError`] values for the caller to surface.

mod envelope;
mod error;
mod http;
mod layout;

pub use error::ClientError;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use layout::{ApiLayout, Method, Operation};

#[cfg(test)]
pub use http::tests::MockHttpClient;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Snapshot of a processor reported by the `status` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProcessorStatus {
    pub processor_name: String,
    pub is_running: bool,
    #[serde(default)]
    pub parameters: Value,
}

/// Statistics mapping: metric name to value.
///
/// Iteration order is whatever the host mapping yields; consumers must
/// not rely on it.
pub type StatisticsMap = serde_json::Map<String, Value>;

/// Client for one node's REST control interface.
pub struct NodeClient<H: HttpClient> {
    http: H,
    layout: ApiLayout,
}

impl<H: HttpClient> NodeClient<H> {
    /// Creates a client from a transport and a resolved layout.
    pub fn new(http: H, layout: ApiLayout) -> Self {
        Self { http, layout }
    }

    /// The layout this client issues requests against.
    pub fn layout(&self) -> &ApiLayout {
        &self.layout
    }

    /// The transport this client was constructed with.
    pub fn transport(&self) -> &H {
        &self.http
    }

    /// Resolve, issue and normalize one request.
    async fn dispatch(&self, operation: Operation, body: Option<String>) -> Result<Value, ClientError> {
        let (method, url) = self.layout.endpoint(operation).ok_or(ClientError::Unsupported {
            operation: operation.name(),
            layout: self.layout.name(),
        })?;

        debug!(operation = operation.name(), url = %url, "issuing control request");

        let response = match method {
            Method::Get => self.http.get(&url).await?,
            Method::Put => self.http.put(&url, body).await?,
            Method::Post => self.http.post(&url, body.unwrap_or_default()).await?,
            Method::Delete => self.http.delete(&url).await?,
        };

        envelope::unwrap_envelope(response, &url)
    }

    /// Start the processor.
    pub async fn start(&self) -> Result<(), ClientError> {
        self.dispatch(Operation::Start, None).await.map(|_| ())
    }

    /// Start the processor, applying raw JSON parameters first.
    ///
    /// Only the namespaced layout accepts a start body; the text is sent
    /// unmodified.
    pub async fn start_with_parameters(&self, parameters: &str) -> Result<(), ClientError> {
        self.dispatch(Operation::Start, Some(parameters.to_string()))
            .await
            .map(|_| ())
    }

    /// Stop the processor.
    pub async fn stop(&self) -> Result<(), ClientError> {
        self.dispatch(Operation::Stop, None).await.map(|_| ())
    }

    /// Fetch the processor parameters object.
    pub async fn get_parameters(&self) -> Result<Value, ClientError> {
        self.dispatch(Operation::GetParameters, None).await
    }

    /// Send raw JSON text as the new processor parameters.
    ///
    /// No client-side validation: malformed input reaches the server
    /// byte-for-byte and is rejected there.
    pub async fn set_parameters(&self, raw_json: &str) -> Result<(), ClientError> {
        self.dispatch(Operation::SetParameters, Some(raw_json.to_string()))
            .await
            .map(|_| ())
    }

    /// Fetch the processor help text.
    pub async fn get_help(&self) -> Result<String, ClientError> {
        let data = self.dispatch(Operation::GetHelp, None).await?;
        match data {
            Value::String(text) => Ok(text),
            other => Ok(other.to_string()),
        }
    }

    /// Fetch the processor status snapshot.
    pub async fn get_status(&self) -> Result<ProcessorStatus, ClientError> {
        let data = self.dispatch(Operation::GetStatus, None).await?;
        serde_json::from_value(data)
            .map_err(|e| ClientError::InvalidResponse(format!("status payload: {}", e)))
    }

    /// Fetch the processor statistics mapping.
    pub async fn get_statistics(&self) -> Result<StatisticsMap, ClientError> {
        let data = self.dispatch(Operation::GetStatistics, None).await?;
        match envelope::unwrap_key(data, "statistics") {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(StatisticsMap::new()),
            other => Err(ClientError::InvalidResponse(format!(
                "statistics payload is not a mapping: {}",
                other
            ))),
        }
    }

    /// Fetch the raw statistics payload (namespaced layout only).
    ///
    /// The shape is implementation-defined by the processor; the payload
    /// is returned as-is.
    pub async fn get_statistics_raw(&self) -> Result<Value, ClientError> {
        let data = self.dispatch(Operation::GetStatisticsRaw, None).await?;
        Ok(envelope::unwrap_key(data, "statistics_raw"))
    }

    /// Reset processor state; returns the parameters after the reset
    /// (namespaced layout only).
    pub async fn reset(&self) -> Result<Value, ClientError> {
        self.dispatch(Operation::Reset, None).await
    }

    /// Stop the processor and terminate the node process (namespaced
    /// layout only).
    ///
    /// The node exits mid-response, so a transport failure after the
    /// request was dispatched counts as success.
    pub async fn kill(&self) -> Result<(), ClientError> {
        match self.dispatch(Operation::Kill, None).await {
            Ok(_) => Ok(()),
            Err(ClientError::Transport(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
