//! Error types for the `suap-auth` crate.
//!
//! Follows the same pattern as domain::error with a root Error struct and error kind enums.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for suap-auth crate.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in suap-auth.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    OAuth(OAuthErrorKind),
    Token(TokenErrorKind),
    Api(ApiErrorKind),
    Http(HttpErrorKind),
}

/// Errors from the authorization-code flow.
#[derive(Debug, PartialEq)]
pub enum OAuthErrorKind {
    /// The provider redirected back with an `error` parameter.
    AuthorizationDenied,
    /// The callback carried neither a code nor an error.
    MissingCode,
    /// The callback `state` did not match the one issued by `/login`.
    InvalidState,
    /// The token endpoint answered with a non-success status.
    TokenExchangeFailed,
    Network,
    InvalidResponse,
}

/// Errors from resolving the current token.
#[derive(Debug, PartialEq)]
pub enum TokenErrorKind {
    NotFound,
}

/// Errors from authenticated resource calls.
#[derive(Debug, PartialEq)]
pub enum ApiErrorKind {
    /// The remote API answered with this non-success status code.
    Status(u16),
    InvalidResponse,
}

/// Errors from HTTP client operations.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
}

impl Error {
    /// True when the error came out of the authorization-code exchange.
    pub fn is_auth_exchange(&self) -> bool {
        matches!(self.error_kind, ErrorKind::OAuth(_))
    }

    /// True when a protected call was attempted without a token.
    pub fn is_missing_token(&self) -> bool {
        self.error_kind == ErrorKind::Token(TokenErrorKind::NotFound)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::OAuth(kind) => write!(f, "OAuth error: {:?}", kind)?,
            ErrorKind::Token(kind) => write!(f, "Token error: {:?}", kind)?,
            ErrorKind::Api(kind) => write!(f, "API error: {:?}", kind)?,
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind)?,
        }
        if let Some(source) = &self.source {
            write!(f, " ({})", source)?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_request() {
            ErrorKind::Http(HttpErrorKind::RequestFailed)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

/// Helper function to create OAuth errors.
pub fn oauth_error(kind: OAuthErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::OAuth(kind),
    }
}

/// Helper function to create token errors.
pub fn token_error(kind: TokenErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Token(kind),
    }
}

/// Helper function to create API errors.
pub fn api_error(kind: ApiErrorKind, message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Api(kind),
    }
}
