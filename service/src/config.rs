use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use secrecy::SecretString;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use suap_auth::ClientSettings;

/// Default SUAP (IFRN) OAuth authorization endpoint.
pub const DEFAULT_SUAP_AUTHORIZE_URL: &str = "https://suap.ifrn.edu.br/o/authorize/";
/// Default SUAP (IFRN) OAuth token endpoint.
pub const DEFAULT_SUAP_TOKEN_URL: &str = "https://suap.ifrn.edu.br/o/token/";
/// Default SUAP (IFRN) REST API base URL.
pub const DEFAULT_SUAP_API_BASE_URL: &str = "https://suap.ifrn.edu.br/api/";
/// Academic period shown on the report card when none is selected.
pub const DEFAULT_ACADEMIC_PERIOD: &str = "2025.1";

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The OAuth client ID registered for this application in SUAP.
    #[arg(long, env)]
    client_id: Option<String>,

    /// The OAuth client secret registered for this application in SUAP.
    #[arg(long, env, hide_env_values = true)]
    client_secret: Option<String>,

    /// The SUAP OAuth authorization endpoint the browser is redirected to.
    #[arg(long, env, default_value = DEFAULT_SUAP_AUTHORIZE_URL)]
    suap_authorize_url: String,

    /// The SUAP OAuth token endpoint used to exchange authorization codes.
    #[arg(long, env, default_value = DEFAULT_SUAP_TOKEN_URL)]
    suap_token_url: String,

    /// The base URL of the SUAP REST API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_SUAP_API_BASE_URL)]
    suap_api_base_url: String,

    /// Space separated OAuth scopes requested from SUAP.
    #[arg(long, env, default_value = "identificacao email")]
    suap_scope: String,

    /// Absolute callback URL registered in SUAP (e.g. https://portal.example.com/login/authorized).
    /// When unset it is derived from the Host header of the login request.
    #[arg(long, env)]
    redirect_uri: Option<String>,

    /// Academic period ("<year>.<term>") shown when none is selected.
    #[arg(long, env, default_value = DEFAULT_ACADEMIC_PERIOD)]
    default_academic_period: String,

    /// Timeout in seconds for each call to SUAP
    #[arg(long, env, default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// Directory served under /static
    #[arg(long, env, default_value = "./static")]
    static_dir: String,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,

    /// Session inactivity expiry in seconds (default: 24 hours = 86400 seconds)
    #[arg(long, env, default_value_t = 86400)]
    pub session_expiry_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn suap_authorize_url(&self) -> &str {
        &self.suap_authorize_url
    }

    pub fn suap_token_url(&self) -> &str {
        &self.suap_token_url
    }

    pub fn suap_api_base_url(&self) -> &str {
        &self.suap_api_base_url
    }

    pub fn suap_scope(&self) -> &str {
        &self.suap_scope
    }

    /// Returns the configured OAuth callback URL, if any.
    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    pub fn default_academic_period(&self) -> &str {
        &self.default_academic_period
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }

    /// Builds the SUAP OAuth client settings.
    ///
    /// Returns `None` when the client ID or secret is missing.
    pub fn client_settings(&self) -> Option<ClientSettings> {
        Some(ClientSettings {
            client_id: self.client_id.clone()?,
            client_secret: SecretString::new(self.client_secret.clone()?),
            authorize_url: self.suap_authorize_url.clone(),
            token_url: self.suap_token_url.clone(),
            api_base_url: self.suap_api_base_url.clone(),
            scope: self.suap_scope.clone(),
        })
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}
