use std::time::Duration;

use chrono::Utc;

use reqsmith_core::types::{ExecuteRequest, ExecutionResult};

use crate::executor::http::TransportError;

/// Engine failure taxonomy. Everything `execute` can trip over collapses
/// into one of these before being folded into an `ExecutionResult`; none of
/// them ever reach the caller as an error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid URL: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl EngineError {
    /// Coarse category exposed as `errorType` on failure results.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidUrl { .. } => "INVALID_URL",
            EngineError::Connection(_) => "CONNECTION_ERROR",
            EngineError::Timeout(_) => "TIMEOUT",
            EngineError::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }
}

impl From<TransportError> for EngineError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Timeout => EngineError::Timeout(e.to_string()),
            TransportError::PoolExhausted(_) => EngineError::Timeout(e.to_string()),
            TransportError::Network(msg) => EngineError::Connection(msg),
            TransportError::Other(msg) => EngineError::Unexpected(msg),
        }
    }
}

/// Folds a failure into the uniform result shape: no status code, the error
/// category and message populated, and the original (unresolved) request URL
/// echoed back.
pub fn failure_result(
    request: &ExecuteRequest,
    error: &EngineError,
    elapsed: Duration,
) -> ExecutionResult {
    ExecutionResult {
        status_code: None,
        status_text: None,
        body: None,
        content_type: None,
        body_size_bytes: 0,
        headers: Vec::new(),
        response_time_ms: elapsed.as_millis() as u64,
        request_url: request.url.clone(),
        request_method: request.method.to_string(),
        timestamp: Utc::now(),
        protocol: None,
        success: false,
        error_message: Some(error.to_string()),
        error_type: Some(error.kind().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqsmith_core::types::HttpMethod;

    #[test]
    fn failure_result_upholds_the_result_invariant() {
        let request = ExecuteRequest::new(HttpMethod::Get, "https://{{host}}/x");
        let error = EngineError::Connection("refused".to_string());
        let result = failure_result(&request, &error, Duration::from_millis(12));

        assert!(!result.success);
        assert_eq!(result.status_code, None);
        assert_eq!(result.error_type.as_deref(), Some("CONNECTION_ERROR"));
        assert_eq!(
            result.error_message.as_deref(),
            Some("Connection failed: refused")
        );
        assert_eq!(result.request_url, "https://{{host}}/x");
        assert_eq!(result.request_method, "GET");
        assert_eq!(result.response_time_ms, 12);
    }

    #[test]
    fn transport_errors_map_onto_the_taxonomy() {
        assert_eq!(EngineError::from(TransportError::Timeout).kind(), "TIMEOUT");
        assert_eq!(
            EngineError::from(TransportError::PoolExhausted(Duration::from_secs(30))).kind(),
            "TIMEOUT"
        );
        assert_eq!(
            EngineError::from(TransportError::Network("dns".to_string())).kind(),
            "CONNECTION_ERROR"
        );
        assert_eq!(
            EngineError::from(TransportError::Other("boom".to_string())).kind(),
            "UNEXPECTED_ERROR"
        );
    }
}
