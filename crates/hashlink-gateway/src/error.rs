use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hashlink_core::{ShortenerError, StorageError};
use thiserror::Error;
use tracing::warn;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("URL cannot be empty")]
    EmptyUrl,
    #[error("Failed to read request body")]
    UnreadableBody,
    #[error("POST only allowed at root path")]
    PostNotAtRoot,
    #[error("404 page not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("stored URL for '{0}' is not a valid redirect target")]
    InvalidLocation(String),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyUrl | AppError::UnreadableBody | AppError::PostNotAtRoot => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidLocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Shortener(ShortenerError::Storage(source)) => match source {
                StorageError::Unavailable(_) | StorageError::Closed => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                StorageError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
                StorageError::Operation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// The body sent to the client. Internal failures get a fixed message.
    fn public_message(&self) -> String {
        match self {
            AppError::InvalidLocation(_) => "Internal server error".to_string(),
            AppError::Shortener(ShortenerError::Storage(source)) => match source {
                StorageError::Unavailable(_) | StorageError::Closed => {
                    "Storage unavailable".to_string()
                }
                StorageError::Timeout(_) => "Storage timed out".to_string(),
                StorageError::Operation(_) => "Internal server error".to_string(),
            },
            client => client.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(status = %status, error = %self, "request failed");
        }
        (status, self.public_message()).into_response()
    }
}
