//! Error Types
//!
//! `LoadError` stays inside the storage layer: the loader turns it into an empty
//! corpus plus a log line. `ApiError` is the only error that reaches HTTP clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid document data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Body returned alongside a non-2xx status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            status: "error".to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_unprocessable_entity() {
        let response = ApiError::Validation("limit out of range".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_load_error_display_includes_path() {
        let err = LoadError::Io {
            path: PathBuf::from("data/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        let message = err.to_string();
        assert!(message.contains("data/missing.json"));
        assert!(message.contains("gone"));
    }
}
