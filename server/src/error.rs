//! Request-level errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Errors a request handler can surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The id in the path matched no row.
    #[error("no user with id {id}")]
    NotFound { id: i64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound { .. } => {
                let body = json!({ "error": self.to_string() });
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::Store(err) => {
                // Store failures stay out of the response body; the detail
                // goes to the log and the caller gets a generic 500.
                error!(error = %err, "store operation failed");
                let body = json!({ "error": "internal server error" });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
