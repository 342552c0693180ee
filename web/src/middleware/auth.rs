use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use log::*;

use crate::extractors::session_context::SessionContext;

/// Sends browsers without a SUAP token to `/login` before any SUAP call is made.
///
/// Uses 303 so that a protected POST continues as a GET on the login route.
pub(crate) async fn require_token(
    context: SessionContext,
    request: Request,
    next: Next,
) -> Response {
    if context.is_authenticated() {
        next.run(request).await
    } else {
        debug!(
            "No SUAP token in session for {}, redirecting to /login",
            request.uri().path()
        );
        Redirect::to("/login").into_response()
    }
}
