use std::collections::HashMap;

use reqsmith_core::types::{ExecuteRequest, KeyValuePair};
use reqsmith_core::vars;

use crate::executor::auth;
use crate::executor::failure::EngineError;
use crate::executor::http::TransportRequest;

const CONTENT_TYPE: &str = "Content-Type";

/// Resolves variables and assembles the wire-ready request.
///
/// Query parameters and headers keep their list order; rows that are
/// disabled or have a blank key are skipped entirely. The only failure mode
/// is a URL that will not parse after resolution.
pub fn build_request(
    request: &ExecuteRequest,
    vars_map: &HashMap<String, String>,
) -> Result<TransportRequest, EngineError> {
    let resolved_url = vars::resolve(&request.url, vars_map);
    let mut url = url::Url::parse(&resolved_url).map_err(|e| EngineError::InvalidUrl {
        url: resolved_url.clone(),
        reason: e.to_string(),
    })?;

    // Entering query_pairs_mut on a query-less URL leaves a dangling `?`,
    // so only touch the query when there is something to append.
    let params: Vec<_> = enabled_rows(&request.query_params).collect();
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for param in params {
            let key = vars::resolve(&param.key, vars_map);
            let value = vars::resolve(&param.value, vars_map);
            pairs.append_pair(&key, &value);
        }
    }

    let mut headers = Vec::new();
    for header in enabled_rows(&request.headers) {
        let name = vars::resolve(&header.key, vars_map);
        let value = vars::resolve(&header.value, vars_map);
        headers.push((name, value));
    }

    auth::apply(&mut headers, &request.auth, vars_map);

    let body = build_body(request, &mut headers, vars_map);

    Ok(TransportRequest {
        method: request.method,
        url,
        headers,
        body,
    })
}

fn enabled_rows(rows: &[KeyValuePair]) -> impl Iterator<Item = &KeyValuePair> {
    rows.iter().filter(|r| r.enabled && !r.key.trim().is_empty())
}

/// A payload is attached only for POST/PUT/PATCH with a non-blank body and a
/// body type other than NONE. The body type's content type is used unless an
/// explicit `Content-Type` header is already present.
fn build_body(
    request: &ExecuteRequest,
    headers: &mut Vec<(String, String)>,
    vars_map: &HashMap<String, String>,
) -> Option<String> {
    if !request.method.supports_body() {
        return None;
    }
    let body = request.body.as_deref()?;
    let content_type = request.body_type.content_type()?;
    if body.trim().is_empty() {
        return None;
    }

    if !headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE))
    {
        headers.push((CONTENT_TYPE.to_string(), content_type.to_string()));
    }

    Some(vars::resolve(body, vars_map))
}
