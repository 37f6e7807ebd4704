use serde::{Deserialize, Serialize};

use crate::types::{AuthScheme, BodyType, HttpMethod};

/// One header, query parameter, or form field row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub value: String,

    /// Disabled rows stay on the request for editing but are never sent.
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
            description: None,
        }
    }
}

/// A fully described request as the caller hands it to the engine.
///
/// Wire shape matches the public API: camelCase fields, `authType` +
/// `authConfig` for the auth scheme, everything beyond `url` and `method`
/// optional with the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    pub url: String,

    pub method: HttpMethod,

    #[serde(default)]
    pub headers: Vec<KeyValuePair>,

    #[serde(default)]
    pub query_params: Vec<KeyValuePair>,

    /// Carried for API compatibility; the execution path reads the raw
    /// `body` string only.
    #[serde(default)]
    pub form_data: Vec<KeyValuePair>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default)]
    pub body_type: BodyType,

    /// The `authType`/`authConfig` pair; absent `authType` means no
    /// authentication.
    #[serde(flatten)]
    pub auth: AuthScheme,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<i64>,

    /// Total per-request deadline in milliseconds; `0` falls back to the
    /// executor's configured default.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_true")]
    pub follow_redirects: bool,

    #[serde(default = "default_true")]
    pub verify_ssl: bool,
}

impl ExecuteRequest {
    /// A request with just a method and URL; everything else at its default.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            query_params: Vec::new(),
            form_data: Vec::new(),
            body: None,
            body_type: BodyType::default(),
            auth: AuthScheme::None,
            environment_id: None,
            name: None,
            description: None,
            collection_id: None,
            timeout_ms: default_timeout_ms(),
            follow_redirects: true,
            verify_ssl: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    30_000
}
