//! # suap-auth
//!
//! OAuth 2.0 client for the SUAP academic-records platform:
//! - Authorization URL generation with a CSRF state parameter
//! - Authorization code exchange for a token bundle
//! - Bearer-authenticated resource calls with a pluggable token source
//! - HTTP client building
//!
//! ## Usage
//!
//! ```rust,ignore
//! use suap_auth::oauth::{Client, ClientSettings, token::TokenBundle};
//!
//! let client = Client::with_timeout(settings, Duration::from_secs(30))?;
//! let redirect = client.authorize_redirect("http://localhost:4000/login/authorized");
//! // ... later, on the callback:
//! let token = client.authorize_access_token(&callback, Some(&redirect.state), callback_url).await?;
//! let profile: serde_json::Value = client
//!     .resource(move || Some(token.clone()))
//!     .get("v2/minhas-informacoes/meus-dados/")
//!     .await?;
//! ```

pub mod error;
pub mod http;
pub mod oauth;
pub mod resource;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
pub use oauth::token::{TokenBundle, TokenSource};
pub use oauth::{AuthorizationRequest, AuthorizationResponse, Client, ClientSettings};
pub use resource::ResourceClient;
