use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Authentication scheme of a request: the `authType` discriminant with its
/// `authConfig` payload, folded into one tagged union.
///
/// Credential fields are optional strings; incomplete credentials make the
/// scheme a no-op at application time rather than an error. The OAuth2
/// refresh/token-endpoint fields are accepted and stored but the engine only
/// reads `accessToken` — token acquisition is the caller's business.
///
/// On the wire this is the `authType`/`authConfig` pair, with an absent
/// `authType` meaning `None`. That default is why (de)serialization is
/// hand-rolled below instead of using serde's adjacent tagging, which
/// treats a missing tag as an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthScheme {
    #[default]
    None,
    BearerToken {
        token: Option<String>,
    },
    BasicAuth {
        username: Option<String>,
        password: Option<String>,
    },
    ApiKey {
        key: Option<String>,
        /// Header carrying the key; blank or absent falls back to `X-API-Key`.
        header_name: Option<String>,
        /// `"header"` or `"query"`. Query placement is not supported and
        /// downgrades to a header.
        location: Option<String>,
    },
    OAuth2 {
        access_token: Option<String>,
        refresh_token: Option<String>,
        token_url: Option<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
        scope: Option<String>,
        grant_type: Option<String>,
    },
}

impl AuthScheme {
    fn tag(&self) -> &'static str {
        match self {
            AuthScheme::None => "NONE",
            AuthScheme::BearerToken { .. } => "BEARER_TOKEN",
            AuthScheme::BasicAuth { .. } => "BASIC_AUTH",
            AuthScheme::ApiKey { .. } => "API_KEY",
            AuthScheme::OAuth2 { .. } => "OAUTH2",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum AuthTag {
    #[default]
    None,
    BearerToken,
    BasicAuth,
    ApiKey,
    #[serde(rename = "OAUTH2")]
    OAuth2,
}

/// Superset of every variant's config fields; the active `authType` decides
/// which of them are read.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAuthConfig {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    header_name: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    token_url: Option<String>,
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    grant_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TaggedAuth {
    #[serde(rename = "authType", default)]
    auth_type: Option<AuthTag>,
    #[serde(rename = "authConfig", default)]
    auth_config: Option<RawAuthConfig>,
}

impl<'de> Deserialize<'de> for AuthScheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tagged = TaggedAuth::deserialize(deserializer)?;
        let tag = tagged.auth_type.unwrap_or_default();
        let cfg = tagged.auth_config.unwrap_or_default();

        Ok(match tag {
            AuthTag::None => AuthScheme::None,
            AuthTag::BearerToken => AuthScheme::BearerToken { token: cfg.token },
            AuthTag::BasicAuth => AuthScheme::BasicAuth {
                username: cfg.username,
                password: cfg.password,
            },
            AuthTag::ApiKey => AuthScheme::ApiKey {
                key: cfg.key,
                header_name: cfg.header_name,
                location: cfg.location,
            },
            AuthTag::OAuth2 => AuthScheme::OAuth2 {
                access_token: cfg.access_token,
                refresh_token: cfg.refresh_token,
                token_url: cfg.token_url,
                client_id: cfg.client_id,
                client_secret: cfg.client_secret,
                scope: cfg.scope,
                grant_type: cfg.grant_type,
            },
        })
    }
}

#[derive(Serialize)]
struct BearerConfigRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a String>,
}

#[derive(Serialize)]
struct BasicConfigRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiKeyConfigRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_name: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OAuth2ConfigRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_url: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_secret: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grant_type: Option<&'a String>,
}

impl Serialize for AuthScheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("authType", self.tag())?;
        match self {
            AuthScheme::None => {}
            AuthScheme::BearerToken { token } => {
                map.serialize_entry(
                    "authConfig",
                    &BearerConfigRef {
                        token: token.as_ref(),
                    },
                )?;
            }
            AuthScheme::BasicAuth { username, password } => {
                map.serialize_entry(
                    "authConfig",
                    &BasicConfigRef {
                        username: username.as_ref(),
                        password: password.as_ref(),
                    },
                )?;
            }
            AuthScheme::ApiKey {
                key,
                header_name,
                location,
            } => {
                map.serialize_entry(
                    "authConfig",
                    &ApiKeyConfigRef {
                        key: key.as_ref(),
                        header_name: header_name.as_ref(),
                        location: location.as_ref(),
                    },
                )?;
            }
            AuthScheme::OAuth2 {
                access_token,
                refresh_token,
                token_url,
                client_id,
                client_secret,
                scope,
                grant_type,
            } => {
                map.serialize_entry(
                    "authConfig",
                    &OAuth2ConfigRef {
                        access_token: access_token.as_ref(),
                        refresh_token: refresh_token.as_ref(),
                        token_url: token_url.as_ref(),
                        client_id: client_id.as_ref(),
                        client_secret: client_secret.as_ref(),
                        scope: scope.as_ref(),
                        grant_type: grant_type.as_ref(),
                    },
                )?;
            }
        }
        map.end()
    }
}
