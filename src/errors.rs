use axum::http::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected form input. Never mutates state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter a name and select a team.")]
pub struct ValidationError;

/// Storage failures. Logged, never shown to the attendee.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt store file: {0}")]
    CorruptStore(#[source] serde_json::Error),
    #[error("unparseable state blob under '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
