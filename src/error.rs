//! Error types for review parsing and dataset loading.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const REVIEW_COLUMN: &str = "review_text";

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Uploaded CSV header has no `review_text` column
    #[error("CSV must include a {column} column.")]
    MissingColumn { column: &'static str },

    /// Catalog lookup for a slug that does not exist
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Failed to read dataset file {path}: {source}")]
    DatasetFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    DatasetFormat(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn missing_review_column() -> Self {
        AnalysisError::MissingColumn {
            column: REVIEW_COLUMN,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::MissingColumn { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::UnknownDataset(_) => StatusCode::NOT_FOUND,
            AnalysisError::DatasetFormat(_) => StatusCode::BAD_REQUEST,
            AnalysisError::DatasetFile { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    #[schema(example = "CSV must include a review_text column.")]
    pub message: String,
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }
        (
            status,
            Json(ErrorResponse {
                success: false,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
