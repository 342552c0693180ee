use config::Config;
use log::info;
use std::sync::Arc;
use suap_auth::{Client, Error as AuthError};

pub mod config;
pub mod logging;

/// Builds the SUAP OAuth client from config.
///
/// Returns `Ok(None)` when the client credentials are not configured.
pub fn init_oauth_client(config: &Config) -> Result<Option<Client>, AuthError> {
    let Some(settings) = config.client_settings() else {
        return Ok(None);
    };

    info!(
        "SUAP OAuth client config: authorize_url={}, token_url={}, api_base_url={}, \
         scope=\"{}\", timeout={}s",
        settings.authorize_url,
        settings.token_url,
        settings.api_base_url,
        settings.scope,
        config.http_timeout_secs,
    );

    Client::with_timeout(settings, config.http_timeout()).map(Some)
}

// Service-level state containing only infrastructure concerns
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub oauth_client: Arc<Client>,
    pub config: Config,
}

impl AppState {
    pub fn new(app_config: Config, oauth_client: &Arc<Client>) -> Self {
        Self {
            oauth_client: Arc::clone(oauth_client),
            config: app_config,
        }
    }

    pub fn oauth_client_ref(&self) -> &Client {
        self.oauth_client.as_ref()
    }
}
