use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use databin_store::StoreError;

use crate::handler::StatusEnvelope;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The request body is not a well-formed JSON object.
    #[error("invalid JSON in request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Server-side failure detail goes to the
    /// log, not over the wire.
    fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "Invalid JSON format in request body",
            _ => "Internal Server Error",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let envelope = StatusEnvelope {
            message: self.public_message().to_string(),
            status: status.as_u16(),
        };
        (status, Json(envelope)).into_response()
    }
}
