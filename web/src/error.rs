use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind};
use log::*;

use crate::view;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl Error {
    /// Wraps a failure of the session store, which is always internal.
    pub(crate) fn session(err: tower_sessions::session::Error) -> Self {
        Self(DomainError {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                "session store".to_string(),
            )),
        })
    }
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// List of possible StatusCode variants https://docs.rs/http/latest/http/status/struct.StatusCode.html
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let reason = self.0.reason();
        match self.0.error_kind {
            DomainErrorKind::Internal(internal_error_kind) => {
                error!("Internal error ({internal_error_kind:?}): {reason}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
            }
            DomainErrorKind::External(external_error_kind) => match external_error_kind {
                ExternalErrorKind::AuthExchange => {
                    warn!("Authorization callback rejected: {reason}");
                    (StatusCode::UNAUTHORIZED, format!("Access denied: {reason}")).into_response()
                }
                ExternalErrorKind::Unauthorized => {
                    debug!("No SUAP token in session, redirecting to /login");
                    Redirect::to("/login").into_response()
                }
                ExternalErrorKind::RemoteApi(status) => {
                    warn!("SUAP answered with status {status}: {reason}");
                    bad_gateway(&format!("O SUAP respondeu com o status {status}."))
                }
                ExternalErrorKind::Network => {
                    warn!("SUAP unreachable: {reason}");
                    bad_gateway("Não foi possível se comunicar com o SUAP.")
                }
                ExternalErrorKind::Other(message) => {
                    warn!("{message}: {reason}");
                    bad_gateway("O SUAP enviou uma resposta inválida.")
                }
            },
        }
    }
}

fn bad_gateway(message: &str) -> Response {
    (StatusCode::BAD_GATEWAY, Html(view::error::page(message))).into_response()
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
