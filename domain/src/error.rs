//! Error types for the `domain` layer.
use std::error::Error as StdError;
use std::fmt;
use suap_auth::error::{
    ApiErrorKind, Error as AuthError, ErrorKind as AuthErrorKind, HttpErrorKind,
};

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums that represent the kinds of errors that can occur in the domain layer or
/// in lower layers. The `source` field is used to hold the original error that caused
/// the domain error. `web` depends on `domain` only and never matches on `suap_auth`
/// errors directly; it uses the `error_kind`s here to pick HTTP responses.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Other(String),
}

/// Enum representing the kinds of errors coming from SUAP, the external identity provider
/// and API.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    /// The authorization-code exchange failed (denied, forged state, rejected code, bad response).
    AuthExchange,
    /// A protected resource was requested without a token in the session.
    Unauthorized,
    /// SUAP answered a resource call with this non-success status.
    RemoteApi(u16),
    Network,
    Other(String),
}

impl Error {
    /// Message of the innermost cause, or the kind when there is none.
    pub fn reason(&self) -> String {
        let Some(source) = self.source.as_deref() else {
            return format!("{:?}", self.error_kind);
        };

        let mut cause: &(dyn StdError + 'static) = source;
        while let Some(inner) = cause.source() {
            cause = inner;
        }
        cause.to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where we translate errors from the `suap_auth` layer to the `domain` layer.
impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        let error_kind = match &err.error_kind {
            AuthErrorKind::OAuth(_) => DomainErrorKind::External(ExternalErrorKind::AuthExchange),
            AuthErrorKind::Token(_) => DomainErrorKind::External(ExternalErrorKind::Unauthorized),
            AuthErrorKind::Api(ApiErrorKind::Status(status)) => {
                DomainErrorKind::External(ExternalErrorKind::RemoteApi(*status))
            }
            AuthErrorKind::Api(ApiErrorKind::InvalidResponse) => DomainErrorKind::External(
                ExternalErrorKind::Other("Invalid response from SUAP".to_string()),
            ),
            AuthErrorKind::Http(HttpErrorKind::BuilderFailed) => DomainErrorKind::Internal(
                InternalErrorKind::Other("Failed to build reqwest client".to_string()),
            ),
            AuthErrorKind::Http(_) => DomainErrorKind::External(ExternalErrorKind::Network),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suap_auth::error::{api_error, oauth_error, token_error, OAuthErrorKind, TokenErrorKind};

    #[test]
    fn test_oauth_errors_become_auth_exchange() {
        for kind in [
            OAuthErrorKind::AuthorizationDenied,
            OAuthErrorKind::InvalidState,
            OAuthErrorKind::TokenExchangeFailed,
            OAuthErrorKind::Network,
        ] {
            let err: Error = oauth_error(kind, "nope").into();
            assert_eq!(
                err.error_kind,
                DomainErrorKind::External(ExternalErrorKind::AuthExchange)
            );
        }
    }

    #[test]
    fn test_missing_token_becomes_unauthorized() {
        let err: Error = token_error(TokenErrorKind::NotFound, "none").into();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Unauthorized)
        );
    }

    #[test]
    fn test_remote_status_is_preserved() {
        let err: Error = api_error(ApiErrorKind::Status(503), "down").into();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::RemoteApi(503))
        );
        assert!(err.reason().contains("down"));
    }

    #[test]
    fn test_reason_is_innermost_message() {
        let err: Error = oauth_error(
            OAuthErrorKind::AuthorizationDenied,
            "reason=access_denied error=The user denied access",
        )
        .into();
        assert_eq!(err.reason(), "reason=access_denied error=The user denied access");
    }
}
