use crate::extractors::session_context::SessionContext;
use crate::params::report_card::PeriodParams;
use crate::{view, AppState, Error};

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect};
use axum::Form;
use domain::{report_card, AcademicPeriod};
use log::*;

/// GET /boletim/
///
/// Report card for the selected academic period, or the configured default period.
#[utoipa::path(
    get,
    path = "/boletim/",
    params(PeriodParams),
    responses(
        (status = 200, description = "Report card page", content_type = "text/html"),
        (status = 303, description = "No SUAP token in session, redirect to /login"),
        (status = 502, description = "SUAP rejected or failed a request"),
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn index(
    State(app_state): State<AppState>,
    context: SessionContext,
    Query(params): Query<PeriodParams>,
) -> Result<Html<String>, Error> {
    let period = AcademicPeriod::selected_or(
        params.periodo.as_deref(),
        app_state.config.default_academic_period(),
    );
    debug!("GET report card for period {}", period);

    let report_card = report_card::find(&context.api(app_state.oauth_client_ref()), period).await?;

    Ok(Html(view::report_card::page_for(&report_card)))
}

/// POST /boletim/
///
/// Turns a period selection into a GET of the report card, keeping the value as submitted.
#[utoipa::path(
    post,
    path = "/boletim/",
    request_body(content = PeriodParams, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to GET /boletim/?periodo=<value>"),
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn select_period(Form(params): Form<PeriodParams>) -> impl IntoResponse {
    match params.periodo {
        Some(periodo) => {
            debug!("Selected academic period {}", periodo);
            Redirect::to(&format!(
                "/boletim/?periodo={}",
                urlencoding::encode(&periodo)
            ))
        }
        None => Redirect::to("/boletim/"),
    }
}
