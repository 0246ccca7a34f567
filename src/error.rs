use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::metrics::ERRORS_TOTAL;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(anyhow::Error),

    #[error("Backing store error: {0}")]
    BackingStore(anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl AppError {
    /// Stable machine-readable kind, surfaced in the response body so callers
    /// can distinguish failure modes without parsing messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidPagination(_) => "invalid_pagination",
            AppError::InvalidFilter(_) => "invalid_filter",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::BackingStore(_) => "backing_store",
            AppError::Config(_) => "config",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: &'static str,
            message: String,
        }

        let status = match &self {
            AppError::InvalidPagination(_) | AppError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BackingStore(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        ERRORS_TOTAL.with_label_values(&[self.kind()]).inc();

        (
            status,
            Json(ErrorResponse {
                error: self.kind(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
