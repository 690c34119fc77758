use std::net::AddrParseError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Rejections of a directory operation. The display strings are part of the
/// HTTP contract and are returned verbatim as `detail`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

impl ActivityError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActivityError::NotFound => StatusCode::NOT_FOUND,
            ActivityError::AlreadySignedUp | ActivityError::NotRegistered => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Fatal startup failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("cannot parse bind address {addr}: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: AddrParseError,
    },
    #[error("server i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
