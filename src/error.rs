// ============================================================================
// ERRORS - One error type for services and view models
// ============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Book not found in current results: {0}")]
    BookNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Parse(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<gloo_storage::errors::StorageError> for AppError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}
