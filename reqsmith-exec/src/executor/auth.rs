use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::warn;

use reqsmith_core::types::AuthScheme;
use reqsmith_core::vars;

const AUTHORIZATION: &str = "Authorization";
const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// Applies the configured auth scheme to the outgoing header set.
///
/// Credential fields go through the variable resolver first. Incomplete or
/// blank credentials make the variant a no-op; this function never fails.
pub fn apply(
    headers: &mut Vec<(String, String)>,
    auth: &AuthScheme,
    vars_map: &HashMap<String, String>,
) {
    match auth {
        AuthScheme::None => {}

        AuthScheme::BearerToken { token } => {
            if let Some(token) = resolve_non_blank(token.as_deref(), vars_map) {
                headers.push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
            }
        }

        AuthScheme::BasicAuth { username, password } => {
            // Blank credentials are legal here; only absence disables the
            // scheme.
            if let (Some(username), Some(password)) = (username.as_deref(), password.as_deref()) {
                let username = vars::resolve(username, vars_map);
                let password = vars::resolve(password, vars_map);
                let encoded = BASE64.encode(format!("{username}:{password}"));
                headers.push((AUTHORIZATION.to_string(), format!("Basic {encoded}")));
            }
        }

        AuthScheme::ApiKey {
            key,
            header_name,
            location,
        } => {
            let Some(key) = resolve_non_blank(key.as_deref(), vars_map) else {
                return;
            };
            let name = match header_name.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => DEFAULT_API_KEY_HEADER.to_string(),
            };
            if location
                .as_deref()
                .is_some_and(|l| l.eq_ignore_ascii_case("query"))
            {
                warn!(header = %name, "api key in query parameter not supported, using header");
            }
            headers.push((name, key));
        }

        AuthScheme::OAuth2 { access_token, .. } => {
            if let Some(token) = resolve_non_blank(access_token.as_deref(), vars_map) {
                headers.push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
            }
        }
    }
}

fn resolve_non_blank(value: Option<&str>, vars_map: &HashMap<String, String>) -> Option<String> {
    let resolved = vars::resolve(value?, vars_map);
    if resolved.trim().is_empty() {
        None
    } else {
        Some(resolved)
    }
}
