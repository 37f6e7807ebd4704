use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One response header in receipt order. Duplicates are preserved, which is
/// why this is a list and not a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    pub name: String,
    pub value: String,
}

/// The uniform outcome of every execution, success or failure.
///
/// Invariants: `success == false` implies `status_code` is absent and
/// `error_message` is populated; `success == true` implies `status_code` is
/// present and the error fields are absent. Callers branch on `success`,
/// never on a thrown error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Byte length of the body as received, before any display formatting.
    #[serde(default)]
    pub body_size_bytes: u64,

    #[serde(default)]
    pub headers: Vec<ResponseHeader>,

    pub response_time_ms: u64,

    pub request_url: String,

    pub request_method: String,

    pub timestamp: DateTime<Utc>,

    /// Negotiated protocol version, e.g. `"HTTP/1.1"`; absent on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}
