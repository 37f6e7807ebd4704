use chrono::Utc;
use serde_json::json;

use reqsmith_core::types::{
    AuthScheme, BodyType, ExecuteRequest, ExecutionResult, HttpMethod, KeyValuePair,
    ResponseHeader,
};

#[test]
fn minimal_request_fills_in_the_documented_defaults() {
    let request: ExecuteRequest =
        serde_json::from_value(json!({"url": "https://api.test/", "method": "GET"})).unwrap();

    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.body_type, BodyType::None);
    assert_eq!(request.auth, AuthScheme::None);
    assert!(request.headers.is_empty());
    assert!(request.query_params.is_empty());
    assert_eq!(request.environment_id, None);
    assert_eq!(request.timeout_ms, 30_000);
    assert!(request.follow_redirects);
    assert!(request.verify_ssl);
}

#[test]
fn a_request_without_auth_round_trips() {
    let request = ExecuteRequest::new(HttpMethod::Get, "https://api.test/");

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["authType"], json!("NONE"));
    assert!(value.get("authConfig").is_none());

    let back: ExecuteRequest = serde_json::from_value(value).unwrap();
    assert_eq!(back.auth, AuthScheme::None);
    assert_eq!(back, request);
}

#[test]
fn key_value_pairs_default_to_enabled() {
    let pair: KeyValuePair =
        serde_json::from_value(json!({"key": "X-Id", "value": "1"})).unwrap();
    assert!(pair.enabled);
    assert_eq!(pair.description, None);
}

#[test]
fn auth_is_keyed_by_auth_type_with_an_auth_config_payload() {
    let request: ExecuteRequest = serde_json::from_value(json!({
        "url": "https://api.test/",
        "method": "POST",
        "authType": "BEARER_TOKEN",
        "authConfig": {"token": "abc"}
    }))
    .unwrap();

    assert_eq!(
        request.auth,
        AuthScheme::BearerToken {
            token: Some("abc".to_string())
        }
    );
}

#[test]
fn basic_and_api_key_auth_parse_their_variant_fields() {
    let basic: ExecuteRequest = serde_json::from_value(json!({
        "url": "https://api.test/",
        "method": "GET",
        "authType": "BASIC_AUTH",
        "authConfig": {"username": "u", "password": "p"}
    }))
    .unwrap();
    assert_eq!(
        basic.auth,
        AuthScheme::BasicAuth {
            username: Some("u".to_string()),
            password: Some("p".to_string())
        }
    );

    let api_key: ExecuteRequest = serde_json::from_value(json!({
        "url": "https://api.test/",
        "method": "GET",
        "authType": "API_KEY",
        "authConfig": {"key": "k", "headerName": "X-Custom", "location": "header"}
    }))
    .unwrap();
    assert_eq!(
        api_key.auth,
        AuthScheme::ApiKey {
            key: Some("k".to_string()),
            header_name: Some("X-Custom".to_string()),
            location: Some("header".to_string())
        }
    );
}

#[test]
fn oauth2_accepts_the_full_config_but_only_needs_the_access_token() {
    let request: ExecuteRequest = serde_json::from_value(json!({
        "url": "https://api.test/",
        "method": "GET",
        "authType": "OAUTH2",
        "authConfig": {
            "accessToken": "tok",
            "refreshToken": "r",
            "tokenUrl": "https://auth.test/token",
            "clientId": "c",
            "clientSecret": "s",
            "scope": "read",
            "grantType": "client_credentials"
        }
    }))
    .unwrap();

    match &request.auth {
        AuthScheme::OAuth2 {
            access_token,
            grant_type,
            ..
        } => {
            assert_eq!(access_token.as_deref(), Some("tok"));
            assert_eq!(grant_type.as_deref(), Some("client_credentials"));
        }
        other => panic!("expected OAuth2, got {other:?}"),
    }
}

#[test]
fn body_types_carry_their_canonical_content_types() {
    assert_eq!(BodyType::None.content_type(), None);
    assert_eq!(BodyType::Json.content_type(), Some("application/json"));
    assert_eq!(BodyType::Xml.content_type(), Some("application/xml"));
    assert_eq!(
        BodyType::FormData.content_type(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(BodyType::Raw.content_type(), Some("text/plain"));
    assert_eq!(
        BodyType::Binary.content_type(),
        Some("application/octet-stream")
    );
}

#[test]
fn body_type_names_are_screaming_snake_case_on_the_wire() {
    assert_eq!(
        serde_json::to_value(BodyType::FormData).unwrap(),
        json!("FORM_DATA")
    );
    assert_eq!(serde_json::to_value(BodyType::None).unwrap(), json!("NONE"));
}

#[test]
fn only_post_put_and_patch_support_a_body() {
    assert!(HttpMethod::Post.supports_body());
    assert!(HttpMethod::Put.supports_body());
    assert!(HttpMethod::Patch.supports_body());
    assert!(!HttpMethod::Get.supports_body());
    assert!(!HttpMethod::Delete.supports_body());
    assert!(!HttpMethod::Head.supports_body());
    assert!(!HttpMethod::Options.supports_body());
}

#[test]
fn execution_result_serializes_camel_case_fields() {
    let result = ExecutionResult {
        status_code: Some(200),
        status_text: Some("OK".to_string()),
        body: Some("{}".to_string()),
        content_type: Some("application/json".to_string()),
        body_size_bytes: 2,
        headers: vec![ResponseHeader {
            name: "content-type".to_string(),
            value: "application/json".to_string(),
        }],
        response_time_ms: 12,
        request_url: "https://api.test/".to_string(),
        request_method: "GET".to_string(),
        timestamp: Utc::now(),
        protocol: Some("HTTP/1.1".to_string()),
        success: true,
        error_message: None,
        error_type: None,
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["statusCode"], json!(200));
    assert_eq!(value["bodySizeBytes"], json!(2));
    assert_eq!(value["responseTimeMs"], json!(12));
    assert_eq!(value["requestUrl"], json!("https://api.test/"));
    assert_eq!(value["requestMethod"], json!("GET"));
    assert_eq!(value["protocol"], json!("HTTP/1.1"));
    // Error fields are omitted entirely on success.
    assert!(value.get("errorMessage").is_none());
    assert!(value.get("errorType").is_none());
}

#[test]
fn request_round_trips_through_json() {
    let mut request = ExecuteRequest::new(HttpMethod::Post, "https://api.test/items");
    request.headers = vec![KeyValuePair::new("X-Tenant", "acme")];
    request.body = Some(r#"{"n":1}"#.to_string());
    request.body_type = BodyType::Json;
    request.auth = AuthScheme::BearerToken {
        token: Some("abc".to_string()),
    };
    request.environment_id = Some(4);

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["authType"], json!("BEARER_TOKEN"));
    assert_eq!(value["authConfig"]["token"], json!("abc"));
    assert_eq!(value["queryParams"], json!([]));
    assert_eq!(value["environmentId"], json!(4));

    let back: ExecuteRequest = serde_json::from_value(value).unwrap();
    assert_eq!(back, request);
}
