//! OAuth token types.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

/// Token bundle returned by the identity provider's token endpoint.
///
/// Stored as-is in the browser session and forwarded as a bearer token on every
/// resource call. Nothing beyond the access token is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBundle {
    /// Access token for API requests.
    #[serde(serialize_with = "serialize_secret")]
    pub access_token: SecretString,
    /// Token type (usually "Bearer").
    pub token_type: String,
    /// Lifetime in seconds as reported by the provider.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// When the access token expires, derived from `expires_in` at exchange time.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Refresh token, if the provider issued one.
    #[serde(default, serialize_with = "serialize_optional_secret")]
    pub refresh_token: Option<SecretString>,
    /// Granted scopes, space separated.
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenBundle {
    /// Build a bundle from a bare access token, mainly for callers that already hold one.
    pub fn bearer(access_token: &str) -> Self {
        Self {
            access_token: SecretString::new(access_token.to_string()),
            token_type: "Bearer".to_string(),
            expires_in: None,
            expires_at: None,
            refresh_token: None,
            scope: None,
        }
    }

    /// Access token value for the `Authorization` header.
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

/// Raw token endpoint response (RFC 6749 section 5.1).
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl From<TokenResponse> for TokenBundle {
    fn from(response: TokenResponse) -> Self {
        let expires_at = response
            .expires_in
            .map(|seconds| Utc::now() + Duration::seconds(seconds));

        Self {
            access_token: SecretString::new(response.access_token),
            token_type: response.token_type,
            expires_in: response.expires_in,
            expires_at,
            refresh_token: response.refresh_token.map(SecretString::new),
            scope: response.scope,
        }
    }
}

fn serialize_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

fn serialize_optional_secret<S: Serializer>(
    secret: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match secret {
        Some(secret) => serializer.serialize_some(secret.expose_secret()),
        None => serializer.serialize_none(),
    }
}

/// Resolves the current token on every authenticated call.
///
/// The web layer implements this over the browser session; tests can use a closure.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<TokenBundle>;
}

impl<F> TokenSource for F
where
    F: Fn() -> Option<TokenBundle> + Send + Sync,
{
    fn token(&self) -> Option<TokenBundle> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_into_bundle_derives_expiry() {
        let response: TokenResponse = serde_json::from_value(serde_json::json!({
            "access_token": "abc",
            "token_type": "Bearer",
            "expires_in": 36000,
            "refresh_token": "def",
            "scope": "identificacao email"
        }))
        .unwrap();

        let bundle = TokenBundle::from(response);

        assert_eq!(bundle.access_token(), "abc");
        assert_eq!(bundle.expires_in, Some(36000));
        assert!(bundle.expires_at.unwrap() > Utc::now() + Duration::hours(9));
        assert_eq!(
            bundle.refresh_token.as_ref().map(|t| t.expose_secret().as_str()),
            Some("def")
        );
    }

    #[test]
    fn test_token_response_defaults_token_type() {
        let response: TokenResponse =
            serde_json::from_value(serde_json::json!({ "access_token": "abc" })).unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert!(TokenBundle::from(response).expires_at.is_none());
    }

    #[test]
    fn test_bundle_survives_session_serialization() {
        let mut bundle = TokenBundle::bearer("secret-token");
        bundle.refresh_token = Some(SecretString::new("refresh".to_string()));

        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["access_token"], "secret-token");
        assert_eq!(value["refresh_token"], "refresh");

        let restored: TokenBundle = serde_json::from_value(value).unwrap();
        assert_eq!(restored.access_token(), "secret-token");
    }

    #[test]
    fn test_debug_output_redacts_tokens() {
        let bundle = TokenBundle::bearer("secret-token");
        assert!(!format!("{:?}", bundle).contains("secret-token"));
    }

    #[test]
    fn test_closure_is_a_token_source() {
        let source = || Some(TokenBundle::bearer("abc"));
        assert_eq!(source.token().unwrap().access_token(), "abc");

        let empty = || None::<TokenBundle>;
        assert!(TokenSource::token(&empty).is_none());
    }
}
