pub mod api_client;
pub mod config;

pub use api_client::ApiClient;
pub use config::ApiConfig;

use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Typed failure for every API call.  Callers match on this to decide
/// whether to refresh a list, show a toast, or drop the session.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// Non-2xx response; `message` is the structured `{error}` body when the
    /// backend sent one, otherwise a status fallback.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 2xx login response whose body did not carry a token.
    #[error("{0}")]
    Auth(String),

    /// Transport-level failure (DNS, CORS, connection refused, ...).
    #[error("network error: {0}")]
    Network(String),

    /// Body did not decode as the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Api { status: 401, .. })
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(message)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decode the error for a non-2xx response from its status and body text.
pub(crate) fn error_from_response(status: u16, status_text: &str, body: &str) -> ApiError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => format!("request failed: {} {}", status, status_text),
    };
    ApiError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_wins() {
        let err = error_from_response(400, "Bad Request", r#"{"error":"name is required"}"#);
        assert_eq!(
            err,
            ApiError::Api {
                status: 400,
                message: "name is required".to_string()
            }
        );
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn unstructured_body_falls_back_to_status() {
        let err = error_from_response(502, "Bad Gateway", "<html>oops</html>");
        assert_eq!(err.to_string(), "request failed: 502 Bad Gateway");
    }

    #[test]
    fn unauthorized_is_detected() {
        assert!(error_from_response(401, "Unauthorized", "").is_unauthorized());
        assert!(!error_from_response(404, "Not Found", "").is_unauthorized());
    }
}
