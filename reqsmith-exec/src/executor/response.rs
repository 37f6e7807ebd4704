use std::time::Duration;

use chrono::Utc;

use reqsmith_core::types::{ExecutionResult, ResponseHeader};

use crate::executor::http::RawResponse;

const DEFAULT_PROTOCOL: &str = "HTTP/1.1";

/// Converts a raw transport response into the canonical result shape.
///
/// The body is read in full; its byte length is recorded before any display
/// formatting. A JSON content type triggers a best-effort pretty-print —
/// purely cosmetic, the raw body is kept whenever reformatting fails.
pub fn normalize(
    raw: RawResponse,
    request_url: &str,
    request_method: &str,
    elapsed: Duration,
) -> ExecutionResult {
    let body_size_bytes = raw.body.len() as u64;

    let content_type = raw
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.clone());

    let mut body =
        (!raw.body.is_empty()).then(|| String::from_utf8_lossy(&raw.body).into_owned());

    if let (Some(ct), Some(text)) = (content_type.as_deref(), body.as_mut()) {
        if ct.contains("json") {
            if let Some(pretty) = pretty_print_json(text) {
                *text = pretty;
            }
        }
    }

    ExecutionResult {
        status_code: Some(raw.status),
        status_text: raw.status_text,
        body,
        content_type,
        body_size_bytes,
        headers: raw
            .headers
            .into_iter()
            .map(|(name, value)| ResponseHeader { name, value })
            .collect(),
        response_time_ms: elapsed.as_millis() as u64,
        request_url: request_url.to_string(),
        request_method: request_method.to_string(),
        timestamp: Utc::now(),
        protocol: Some(raw.version.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string())),
        success: true,
        error_message: None,
        error_type: None,
    }
}

fn pretty_print_json(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
