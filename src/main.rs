use log::{error, info, warn};
use service::{config::Config, logging::Logger};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config as &Config) {
        eprintln!("Failed to initialize logger: {e}");
    }

    info!(
        "Starting up SUAP portal [{}], default academic period {}",
        config.runtime_env(),
        config.default_academic_period()
    );

    let oauth_client = match service::init_oauth_client(&config) {
        Ok(Some(client)) => Arc::new(client),
        Ok(None) => {
            error!("CLIENT_ID and CLIENT_SECRET must be set to log in with SUAP");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Failed to build the SUAP OAuth client: {e}");
            std::process::exit(1);
        }
    };

    if config.redirect_uri().is_none() {
        warn!("REDIRECT_URI not set, the OAuth callback URL will be derived from the Host header");
    }

    let app_state = service::AppState::new(config, &oauth_client);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}
