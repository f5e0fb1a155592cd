//! Response envelope normalization.
//!
//! Every API response is a JSON envelope: `{status: "ok", data: ...}` on
//! success, `{status: "error", message: ...}` on failure. The server
//! delivers error envelopes with HTTP 500 as well as 200, so the envelope
//! is parsed before the HTTP status is considered.

use super::error::ClientError;
use super::http::HttpResponse;
use serde::Deserialize;
use serde_json::Value;

/// Wire format of an API response.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Normalize a response into the envelope's `data` field.
///
/// - `{status: "ok", data}` yields exactly `data`, unchanged (`Null` when
///   the envelope carries only a message, as start/stop responses do).
/// - Any other status yields [`ClientError::Api`] with the server message
///   verbatim.
/// - A body that is not an envelope yields [`ClientError::Transport`] for
///   HTTP error statuses and [`ClientError::InvalidResponse`] otherwise.
pub(crate) fn unwrap_envelope(response: HttpResponse, url: &str) -> Result<Value, ClientError> {
    match serde_json::from_slice::<Envelope>(&response.body) {
        Ok(envelope) => {
            if envelope.status == "ok" {
                Ok(envelope.data.unwrap_or(Value::Null))
            } else {
                Err(ClientError::Api(envelope.message.unwrap_or_else(|| {
                    format!("Server reported an error (HTTP {})", response.status)
                })))
            }
        }
        Err(_) if !(200..300).contains(&response.status) => Err(ClientError::Transport(format!(
            "HTTP {} from {}",
            response.status, url
        ))),
        Err(e) => Err(ClientError::InvalidResponse(e.to_string())),
    }
}

/// Strip a single-key wrapper object the server wraps some payloads in.
///
/// `statistics` responses arrive as `{"statistics": {...}}` inside `data`;
/// older deployments return the mapping directly. Anything that is not a
/// one-entry object with the expected key passes through unchanged.
pub(crate) fn unwrap_key(mut data: Value, key: &str) -> Value {
    if let Value::Object(ref mut map) = data {
        if map.len() == 1 {
            if let Some(inner) = map.remove(key) {
                return inner;
            }
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_ok_envelope_yields_data_unchanged() {
        let data = json!({"nested": {"list": [1, 2, 3]}, "flag": true});
        let body = json!({"status": "ok", "data": data}).to_string();

        let result = unwrap_envelope(response(200, &body), "http://node/status").unwrap();
        assert_eq!(result, data);
    }

    #[test]
    fn test_ok_envelope_without_data_yields_null() {
        let body = r#"{"status": "ok", "message": "Process started."}"#;
        let result = unwrap_envelope(response(200, body), "http://node/").unwrap();
        assert_eq!(result, Value::Null);
    }

    #[test]
    fn test_error_envelope_forwards_message_verbatim() {
        let body = r#"{"status": "error", "message": "Cannot set writer parameters."}"#;
        let err = unwrap_envelope(response(200, body), "http://node/parameters").unwrap_err();
        assert_eq!(
            err,
            ClientError::Api("Cannot set writer parameters.".to_string())
        );
    }

    #[test]
    fn test_error_envelope_with_http_500_still_parsed() {
        // The server's 500 handler wraps the exception in an envelope
        let body = r#"{"status": "error", "message": "Expecting value: line 1 column 1"}"#;
        let err = unwrap_envelope(response(500, body), "http://node/parameters").unwrap_err();
        assert_eq!(
            err,
            ClientError::Api("Expecting value: line 1 column 1".to_string())
        );
    }

    #[test]
    fn test_non_ok_status_without_message_gets_fallback() {
        let body = r#"{"status": "error"}"#;
        let err = unwrap_envelope(response(500, body), "http://node/").unwrap_err();
        assert!(matches!(err, ClientError::Api(ref msg) if msg.contains("500")));
    }

    #[test]
    fn test_http_error_without_envelope_is_transport() {
        let err = unwrap_envelope(
            response(502, "<html>Bad Gateway</html>"),
            "http://node/status",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ClientError::Transport("HTTP 502 from http://node/status".to_string())
        );
    }

    #[test]
    fn test_http_success_without_envelope_is_invalid_response() {
        let err = unwrap_envelope(response(200, "not json"), "http://node/status").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_unwrap_key_strips_matching_wrapper() {
        let wrapped = json!({"statistics": {"count": 5}});
        assert_eq!(unwrap_key(wrapped, "statistics"), json!({"count": 5}));
    }

    #[test]
    fn test_unwrap_key_passes_bare_mapping_through() {
        let bare = json!({"count": 5, "rate": "2.1"});
        assert_eq!(unwrap_key(bare.clone(), "statistics"), bare);
    }

    #[test]
    fn test_unwrap_key_ignores_multi_key_objects() {
        let multi = json!({"statistics": {}, "extra": 1});
        assert_eq!(unwrap_key(multi.clone(), "statistics"), multi);
    }
}
