pub(crate) mod session_context;

use axum::http::StatusCode;

type RejectionType = (StatusCode, String);
