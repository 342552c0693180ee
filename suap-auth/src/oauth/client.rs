//! SUAP OAuth client.
//!
//! Builds the authorization redirect, exchanges authorization codes for tokens and
//! hands out [`ResourceClient`]s bound to a token source.

use std::time::Duration;

use log::*;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::state;
use super::token::{TokenBundle, TokenResponse, TokenSource};
use crate::error::{oauth_error, Error, ErrorKind, OAuthErrorKind};
use crate::http::ClientBuilder;
use crate::resource::ResourceClient;

/// Identity provider and API endpoints plus the registered client credentials.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub client_id: String,
    pub client_secret: SecretString,
    pub authorize_url: String,
    pub token_url: String,
    pub api_base_url: String,
    pub scope: String,
}

/// Authorization request with URL and the CSRF state that must round-trip.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    /// Authorization URL to redirect the user to.
    pub url: String,
    /// CSRF state parameter for validation on callback.
    pub state: String,
}

/// Query parameters the provider sends back to the callback route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorizationResponse {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl AuthorizationResponse {
    /// Human readable reason when the provider refused the authorization.
    pub fn denial_reason(&self) -> Option<String> {
        self.error.as_ref().map(|error| {
            format!(
                "reason={} error={}",
                error,
                self.error_description.as_deref().unwrap_or("")
            )
        })
    }
}

/// Form body sent to the token endpoint.
#[derive(Debug, Serialize)]
struct TokenExchangeRequest<'a> {
    grant_type: &'a str,
    code: &'a str,
    redirect_uri: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// OAuth client for the SUAP identity provider and API.
pub struct Client {
    settings: ClientSettings,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a client over an already configured `reqwest::Client`.
    pub fn new(settings: ClientSettings, http_client: reqwest::Client) -> Self {
        Self {
            settings,
            http_client,
        }
    }

    /// Create a client with its own HTTP client using the given request timeout.
    pub fn with_timeout(settings: ClientSettings, timeout: Duration) -> Result<Self, Error> {
        let http_client = ClientBuilder::new().with_timeout(timeout).build()?;
        Ok(Self::new(settings, http_client))
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Generate the authorization URL the browser is redirected to.
    ///
    /// A fresh state is generated for every call; the caller must keep it until the
    /// provider redirects back to `callback_url`.
    pub fn authorize_redirect(&self, callback_url: &str) -> AuthorizationRequest {
        let state = state::generate();
        let separator = if self.settings.authorize_url.contains('?') {
            '&'
        } else {
            '?'
        };

        let url = format!(
            "{}{}\
            response_type=code&\
            client_id={}&\
            redirect_uri={}&\
            scope={}&\
            state={}",
            self.settings.authorize_url,
            separator,
            urlencoding::encode(&self.settings.client_id),
            urlencoding::encode(callback_url),
            urlencoding::encode(&self.settings.scope),
            urlencoding::encode(&state)
        );

        AuthorizationRequest { url, state }
    }

    /// Exchange the authorization code carried by the callback for a token bundle.
    ///
    /// `expected_state` is the state issued by [`Client::authorize_redirect`] for this
    /// browser session and `callback_url` must equal the redirect URI sent then.
    pub async fn authorize_access_token(
        &self,
        response: &AuthorizationResponse,
        expected_state: Option<&str>,
        callback_url: &str,
    ) -> Result<TokenBundle, Error> {
        if let Some(reason) = response.denial_reason() {
            warn!("Authorization denied by provider: {}", reason);
            return Err(oauth_error(OAuthErrorKind::AuthorizationDenied, &reason));
        }

        if !state::matches(expected_state, response.state.as_deref()) {
            warn!("OAuth callback state does not match the issued state");
            return Err(oauth_error(
                OAuthErrorKind::InvalidState,
                "state mismatch, please restart the login",
            ));
        }

        let code = response
            .code
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| {
                oauth_error(OAuthErrorKind::MissingCode, "callback carried no code")
            })?;

        let request = TokenExchangeRequest {
            grant_type: "authorization_code",
            code,
            redirect_uri: callback_url,
            client_id: &self.settings.client_id,
            client_secret: self.settings.client_secret.expose_secret(),
        };

        debug!("Exchanging SUAP OAuth code for tokens");

        let http_response = self
            .http_client
            .post(&self.settings.token_url)
            .form(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to exchange SUAP OAuth code: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::OAuth(OAuthErrorKind::Network),
                }
            })?;

        if http_response.status().is_success() {
            let tokens: TokenResponse = http_response.json().await.map_err(|e| {
                warn!("Failed to parse SUAP token response: {:?}", e);
                Error {
                    source: Some(Box::new(e)),
                    error_kind: ErrorKind::OAuth(OAuthErrorKind::InvalidResponse),
                }
            })?;
            info!("Successfully exchanged SUAP OAuth code for tokens");
            Ok(tokens.into())
        } else {
            let status = http_response.status();
            let error_text = http_response.text().await.unwrap_or_default();
            warn!("SUAP token endpoint error ({}): {}", status, error_text);
            Err(oauth_error(
                OAuthErrorKind::TokenExchangeFailed,
                &format!("token endpoint returned {}: {}", status.as_u16(), error_text),
            ))
        }
    }

    /// Bind a token source to this client for authenticated resource calls.
    pub fn resource<'a, T>(&'a self, token_source: T) -> ResourceClient<'a>
    where
        T: TokenSource + 'a,
    {
        ResourceClient::new(self, Box::new(token_source))
    }

    /// URL of a resource path under the API base URL.
    ///
    /// The path is always joined onto the base, so a bearer token never leaves SUAP's API host.
    pub(crate) fn resource_url(&self, resource_path: &str) -> String {
        format!(
            "{}/{}",
            self.settings.api_base_url.trim_end_matches('/'),
            resource_path.trim_start_matches('/')
        )
    }
}
