use crate::{
    controller::health_check_controller, middleware::auth::require_token, params, AppState,
};
use axum::{
    middleware::from_fn,
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::controller::{home_controller, oauth_controller, report_card_controller};

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI document. To be a part
// of the rendered document, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "SUAP Portal"
        ),
        paths(
            health_check_controller::health_check,
            home_controller::index,
            oauth_controller::login,
            oauth_controller::authorized,
            oauth_controller::logout,
            report_card_controller::index,
            report_card_controller::select_period,
        ),
        components(
            schemas(
                params::report_card::PeriodParams,
            )
        ),
        modifiers(&SecurityAddon),
        tags(
            (name = "suap_portal", description = "SUAP student portal")
        )
    )]
struct ApiDoc;

struct SecurityAddon;

// Pages that read from SUAP rely on the session cookie set during the OAuth login.
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "id",
                    "Session id value set by the SUAP login callback via Set-Cookie header",
                ))),
            )
        }
    }
}

pub fn define_routes(app_state: AppState) -> Router {
    let static_dir = app_state.config.static_dir().to_string();

    Router::new()
        .merge(home_routes(app_state.clone()))
        .merge(health_routes())
        .merge(oauth_routes(app_state.clone()))
        .merge(report_card_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .nest_service("/static", static_routes(&static_dir))
}

fn home_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home_controller::index))
        .with_state(app_state)
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

/// Routes for the SUAP OAuth flow. None require a token: they are how one is obtained.
fn oauth_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/login", get(oauth_controller::login))
        .route(
            oauth_controller::CALLBACK_PATH,
            get(oauth_controller::authorized),
        )
        .route("/logout", get(oauth_controller::logout))
        .with_state(app_state)
}

fn report_card_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/boletim/",
            get(report_card_controller::index).post(report_card_controller::select_period),
        )
        .route_layer(from_fn(require_token))
        .merge(Router::new().route(
            "/boletim",
            get(|| async { Redirect::permanent("/boletim/") }),
        ))
        .with_state(app_state)
}

pub fn static_routes(static_dir: &str) -> ServeDir {
    ServeDir::new(static_dir)
}
