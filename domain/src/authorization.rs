//! SUAP login: authorization redirect and code exchange.

use crate::error::Error;
use log::*;
use suap_auth::{AuthorizationRequest, AuthorizationResponse, Client, TokenBundle};

/// Build the SUAP authorization redirect for a browser session.
///
/// The returned state must be stored in the session until the callback arrives.
pub fn authorize_redirect(client: &Client, callback_url: &str) -> AuthorizationRequest {
    info!("Redirecting browser to SUAP OAuth, callback {}", callback_url);
    client.authorize_redirect(callback_url)
}

/// Exchange the callback's authorization code for a token bundle.
///
/// Any failure (provider denial, state mismatch, rejected code, unreadable response)
/// maps to `ExternalErrorKind::AuthExchange`.
pub async fn authorize_access_token(
    client: &Client,
    callback: &AuthorizationResponse,
    expected_state: Option<&str>,
    callback_url: &str,
) -> Result<TokenBundle, Error> {
    let token = client
        .authorize_access_token(callback, expected_state, callback_url)
        .await
        .inspect_err(|e| warn!("SUAP authorization failed: {}", e))?;

    debug!(
        "SUAP token obtained, type {}, expires at {:?}",
        token.token_type, token.expires_at
    );
    Ok(token)
}
