//! Stable error codes and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found")]
    NotFound { id: String },

    #[error("No data")]
    NoData,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::NoData => "NO_DATA",
            Self::Io(_) => "IO_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Db(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::NoData => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        AppErrorDto {
            error: self.to_string(),
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Db(_) | Self::Io(_) => log::error!("[{}] {}", self.code(), self),
            Self::NotFound { id } => log::debug!("[{}] application {}", self.code(), id),
            _ => log::warn!("[{}] {}", self.code(), self),
        }
        (self.status(), Json(self.to_serde())).into_response()
    }
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub error: String,
}
