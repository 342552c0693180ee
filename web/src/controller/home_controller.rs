use crate::extractors::session_context::SessionContext;
use crate::{view, AppState, Error};

use axum::extract::State;
use axum::response::Html;
use domain::profile;
use log::*;

/// GET /
///
/// Landing page for anonymous visitors, profile summary once logged in.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Home page", content_type = "text/html"),
        (status = 502, description = "SUAP failed to return the profile"),
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn index(
    State(app_state): State<AppState>,
    context: SessionContext,
) -> Result<Html<String>, Error> {
    if !context.is_authenticated() {
        return Ok(Html(view::home::anonymous()));
    }

    let profile = profile::find(&context.api(app_state.oauth_client_ref())).await?;
    trace!("Rendering home page for {}", profile.display_name());

    Ok(Html(view::home::authenticated(&profile)))
}
