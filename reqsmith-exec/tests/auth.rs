use std::collections::HashMap;

use reqsmith_core::types::AuthScheme;
use reqsmith_exec::executor::auth;

fn apply(scheme: &AuthScheme) -> Vec<(String, String)> {
    apply_with(scheme, &HashMap::new())
}

fn apply_with(scheme: &AuthScheme, vars: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    auth::apply(&mut headers, scheme, vars);
    headers
}

#[test]
fn none_is_a_no_op() {
    assert!(apply(&AuthScheme::None).is_empty());
}

#[test]
fn bearer_token_sets_authorization() {
    let headers = apply(&AuthScheme::BearerToken {
        token: Some("abc".to_string()),
    });
    assert_eq!(
        headers,
        vec![("Authorization".to_string(), "Bearer abc".to_string())]
    );
}

#[test]
fn blank_bearer_token_is_a_no_op() {
    assert!(apply(&AuthScheme::BearerToken {
        token: Some("   ".to_string()),
    })
    .is_empty());
    assert!(apply(&AuthScheme::BearerToken { token: None }).is_empty());
}

#[test]
fn bearer_token_resolves_variables() {
    let vars = HashMap::from([("apiToken".to_string(), "resolved".to_string())]);
    let headers = apply_with(
        &AuthScheme::BearerToken {
            token: Some("{{apiToken}}".to_string()),
        },
        &vars,
    );
    assert_eq!(headers[0].1, "Bearer resolved");
}

#[test]
fn basic_auth_encodes_credentials() {
    let headers = apply(&AuthScheme::BasicAuth {
        username: Some("u".to_string()),
        password: Some("p".to_string()),
    });
    // base64("u:p")
    assert_eq!(
        headers,
        vec![("Authorization".to_string(), "Basic dTpw".to_string())]
    );
}

#[test]
fn basic_auth_without_password_is_a_no_op() {
    assert!(apply(&AuthScheme::BasicAuth {
        username: Some("u".to_string()),
        password: None,
    })
    .is_empty());
}

#[test]
fn api_key_uses_the_default_header_name() {
    let headers = apply(&AuthScheme::ApiKey {
        key: Some("k".to_string()),
        header_name: None,
        location: None,
    });
    assert_eq!(headers, vec![("X-API-Key".to_string(), "k".to_string())]);
}

#[test]
fn api_key_honors_a_custom_header_name() {
    let headers = apply(&AuthScheme::ApiKey {
        key: Some("k".to_string()),
        header_name: Some("X-Custom-Key".to_string()),
        location: Some("header".to_string()),
    });
    assert_eq!(headers, vec![("X-Custom-Key".to_string(), "k".to_string())]);
}

#[test]
fn blank_api_key_header_name_falls_back_to_default() {
    let headers = apply(&AuthScheme::ApiKey {
        key: Some("k".to_string()),
        header_name: Some("  ".to_string()),
        location: None,
    });
    assert_eq!(headers[0].0, "X-API-Key");
}

#[test]
fn api_key_query_location_downgrades_to_header() {
    let headers = apply(&AuthScheme::ApiKey {
        key: Some("k".to_string()),
        header_name: None,
        location: Some("QUERY".to_string()),
    });
    assert_eq!(headers, vec![("X-API-Key".to_string(), "k".to_string())]);
}

#[test]
fn missing_api_key_is_a_no_op() {
    assert!(apply(&AuthScheme::ApiKey {
        key: None,
        header_name: Some("X-Custom".to_string()),
        location: None,
    })
    .is_empty());
}

#[test]
fn oauth2_uses_the_access_token_as_bearer() {
    let headers = apply(&AuthScheme::OAuth2 {
        access_token: Some("tok".to_string()),
        refresh_token: Some("unused".to_string()),
        token_url: None,
        client_id: None,
        client_secret: None,
        scope: None,
        grant_type: None,
    });
    assert_eq!(
        headers,
        vec![("Authorization".to_string(), "Bearer tok".to_string())]
    );
}

#[test]
fn oauth2_without_access_token_is_a_no_op() {
    assert!(apply(&AuthScheme::OAuth2 {
        access_token: None,
        refresh_token: Some("r".to_string()),
        token_url: Some("https://auth.test/token".to_string()),
        client_id: Some("c".to_string()),
        client_secret: Some("s".to_string()),
        scope: None,
        grant_type: Some("client_credentials".to_string()),
    })
    .is_empty());
}
