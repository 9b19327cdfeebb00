//! Error types for the shopping list service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Service error type
#[derive(Error, Debug)]
pub enum AppError {
    /// No item with the requested name exists in the store
    #[error("Item not found")]
    ItemNotFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Invalid listen address
    #[error("Invalid listen address: {0}")]
    Addr(#[from] std::net::AddrParseError),
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::ItemNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
