//! Controller for the SUAP OAuth login flow.
//!
//! These endpoints are reached through browser redirects, so they answer with redirects or
//! plain text rather than JSON.

use crate::extractors::session_context::SessionContext;
use crate::{AppState, Error};

use axum::extract::{Query, State};
use axum::http::{header::HOST, HeaderMap};
use axum::response::{IntoResponse, Redirect};

use domain::{authorization, AuthorizationResponse};
use log::*;
use service::config::Config;

/// Path SUAP redirects back to after the user authorizes (or denies) access.
pub(crate) const CALLBACK_PATH: &str = "/login/authorized";

/// GET /login
///
/// Starts the SUAP OAuth flow by storing a fresh CSRF state in the session and redirecting
/// to SUAP's authorization endpoint.
#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 307, description = "Redirect to SUAP OAuth"),
        (status = 500, description = "Session store failure"),
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    context: SessionContext,
) -> Result<impl IntoResponse, Error> {
    let callback_url = callback_url(&app_state.config, &headers);
    let request = authorization::authorize_redirect(app_state.oauth_client_ref(), &callback_url);

    context.begin_authorization(&request.state).await?;

    Ok(Redirect::temporary(&request.url))
}

/// GET /login/authorized
///
/// Handles the OAuth callback from SUAP: checks the CSRF state, exchanges the code and
/// stores the token in the session.
#[utoipa::path(
    get,
    path = "/login/authorized",
    params(
        ("code" = Option<String>, Query, description = "Authorization code from SUAP"),
        ("state" = Option<String>, Query, description = "CSRF state issued by /login"),
        ("error" = Option<String>, Query, description = "Error code when the user denied access"),
        ("error_description" = Option<String>, Query, description = "Human readable error"),
    ),
    responses(
        (status = 307, description = "Redirect to the home page on success"),
        (status = 401, description = "Access denied, as plain text"),
        (status = 500, description = "Session store failure"),
    )
)]
pub async fn authorized(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    mut context: SessionContext,
    Query(callback): Query<AuthorizationResponse>,
) -> Result<impl IntoResponse, Error> {
    let expected_state = context.take_oauth_state().await?;
    let callback_url = callback_url(&app_state.config, &headers);

    let token = match authorization::authorize_access_token(
        app_state.oauth_client_ref(),
        &callback,
        expected_state.as_deref(),
        &callback_url,
    )
    .await
    {
        Ok(token) => token,
        Err(err) => {
            context.clear_token().await?;
            return Err(err.into());
        }
    };

    context.store_token(token).await?;
    info!("SUAP login completed");

    Ok(Redirect::temporary("/"))
}

/// GET /logout
///
/// Removes the SUAP token from the session and returns to the home page.
#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 307, description = "Redirect to the home page"),
        (status = 500, description = "Session store failure"),
    )
)]
pub async fn logout(mut context: SessionContext) -> Result<impl IntoResponse, Error> {
    context.clear_token().await?;
    debug!("SUAP token removed from session");

    Ok(Redirect::temporary("/"))
}

/// Absolute callback URL sent to SUAP: the configured one, or one built from the Host header.
fn callback_url(config: &Config, headers: &HeaderMap) -> String {
    if let Some(redirect_uri) = config.redirect_uri() {
        return redirect_uri.to_string();
    }

    let scheme = if config.is_production() { "https" } else { "http" };
    let host = headers
        .get(HOST)
        .and_then(|host| host.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "{}:{}",
                config.interface.as_deref().unwrap_or("127.0.0.1"),
                config.port
            )
        });

    format!("{scheme}://{host}{CALLBACK_PATH}")
}
