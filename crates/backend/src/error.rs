use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campusmap_shared::{
    error::{LoadError, ParseKindError},
    models::DatasetKind,
};
use thiserror::Error;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    UnknownKind(#[from] ParseKindError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnknownKind(_) => StatusCode::NOT_FOUND,
        };
        tracing::debug!(error = %self, "Request failed");

        (status, self.to_string()).into_response()
    }
}

/// Startup failures while reading the asset directory.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dataset {kind} has an unexpected shape: {source}")]
    Shape {
        kind: DatasetKind,
        #[source]
        source: LoadError,
    },
}
