use crate::model::ApiResponse;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, info};
use wormhole_core::{ErrorKind, ShortenerError};

pub type Result<T> = std::result::Result<T, AppError>;

pub const AUTH_REALM: &str = "wormhole";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
    /// The request body could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The stored target does not parse as a URL.
    #[error("malformed redirect target: {0}")]
    MalformedTarget(String),
    #[error("unauthorized")]
    Unauthorized,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Shortener(err) => match err.kind() {
                ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                ErrorKind::AliasExists | ErrorKind::AliasHasReferences => StatusCode::CONFLICT,
                ErrorKind::AliasNotFound => StatusCode::NOT_FOUND,
                ErrorKind::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
                ErrorKind::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            },
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedTarget(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    /// Message shown to clients. Storage details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Shortener(err) => match err.kind() {
                ErrorKind::StorageFailure => "internal server error".to_string(),
                ErrorKind::AliasExists => match err {
                    ShortenerError::AliasUnavailable { .. } => {
                        "could not allocate a free alias, try again".to_string()
                    }
                    _ => "alias already exists".to_string(),
                },
                ErrorKind::AliasNotFound => "url not found".to_string(),
                _ => err.to_string(),
            },
            AppError::MalformedTarget(_) => {
                "internal server error - malformed redirect URL".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            info!(error = %self, "request rejected");
        }

        let body = Json(ApiResponse::error(self.public_message()));
        match self {
            AppError::Unauthorized => (
                status,
                [(
                    header::WWW_AUTHENTICATE,
                    format!("Basic realm=\"{AUTH_REALM}\""),
                )],
                body,
            )
                .into_response(),
            _ => (status, body).into_response(),
        }
    }
}
