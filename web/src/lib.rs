//! HTTP front-end of the SUAP portal: routes, session handling and HTML pages.

use log::*;
use service::config::Config;
use time::Duration;
use tokio::net::TcpListener;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

pub use self::error::{Error, Result};
pub use service::AppState;

mod controller;
mod error;
mod extractors;
mod middleware;
mod params;
pub mod router;
mod view;

/// Session layer shared by all routes.
///
/// SameSite must stay Lax: SUAP's redirect back to the callback is a cross-site navigation
/// and a Strict cookie would not be sent with it.
pub fn session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.is_production())
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            config.session_expiry_seconds as i64,
        )))
}

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let interface = app_state
        .config
        .interface
        .clone()
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let listen_addr = format!("{}:{}", interface, app_state.config.port);

    info!(
        "Session cookie: secure={}, inactivity expiry={}s",
        app_state.config.is_production(),
        app_state.config.session_expiry_seconds
    );
    let session_layer = session_layer(&app_state.config);

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Server starting... listening for connections on http://{listen_addr}");

    axum::serve(listener, router::define_routes(app_state).layer(session_layer)).await
}
