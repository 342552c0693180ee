use crate::error::{Error, Result as WebResult};
use crate::extractors::RejectionType;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use domain::{Client, ResourceClient, TokenBundle};
use log::*;
use tower_sessions::Session;

/// Session key holding the SUAP token bundle.
pub(crate) const TOKEN_KEY: &str = "suap_token";
/// Session key holding the CSRF state issued by `/login`.
pub(crate) const OAUTH_STATE_KEY: &str = "suap_oauth_state";

/// The browser session together with the SUAP token it carries, if any.
pub(crate) struct SessionContext {
    session: Session,
    token: Option<TokenBundle>,
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    // Wraps the tower-sessions Session extractor and loads the token once per request.
    // A session that cannot be read is an internal error, not an anonymous visitor.
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(status, msg)| (status, msg.to_string()))?;

        let token = session.get::<TokenBundle>(TOKEN_KEY).await.map_err(|e| {
            error!("Failed to read SUAP token from session: {e:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL SERVER ERROR".to_string(),
            )
        })?;

        Ok(Self { session, token })
    }
}

impl SessionContext {
    pub(crate) fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Resource client for `client` that authenticates with this session's token.
    pub(crate) fn api<'a>(&self, client: &'a Client) -> ResourceClient<'a> {
        let token = self.token.clone();
        client.resource(move || token.clone())
    }

    /// Remembers the CSRF state of a login that was just started.
    pub(crate) async fn begin_authorization(&self, state: &str) -> WebResult<()> {
        self.session
            .insert(OAUTH_STATE_KEY, state)
            .await
            .map_err(Error::session)
    }

    /// Removes and returns the pending CSRF state so it can only be used once.
    pub(crate) async fn take_oauth_state(&self) -> WebResult<Option<String>> {
        self.session
            .remove::<String>(OAUTH_STATE_KEY)
            .await
            .map_err(Error::session)
    }

    /// Stores the token of a completed login and issues a new session id.
    pub(crate) async fn store_token(&mut self, token: TokenBundle) -> WebResult<()> {
        self.session
            .insert(TOKEN_KEY, &token)
            .await
            .map_err(Error::session)?;
        self.session.cycle_id().await.map_err(Error::session)?;
        self.token = Some(token);
        Ok(())
    }

    pub(crate) async fn clear_token(&mut self) -> WebResult<()> {
        self.session
            .remove::<TokenBundle>(TOKEN_KEY)
            .await
            .map_err(Error::session)?;
        self.token = None;
        Ok(())
    }
}
