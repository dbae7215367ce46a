use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Relay error type
///
/// The relay is deliberately lenient: most malformed input is logged and
/// swallowed, so the only caller-visible failure is a missing required
/// field.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} is required")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::MissingField(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": {
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}
