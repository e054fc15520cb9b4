use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use citydb_core::api::ErrorView;
use citydb_core::{CityDbError, QueryError};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// Lookups that find nothing are *not* HTTP errors: [`ServerError::Missing`]
/// answers them with a `200` and an `{"error": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    Missing(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] CityDbError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Missing(_) => StatusCode::OK,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Dataset(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::Missing(_) => "MISSING",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::NotFound => "NOT_FOUND",
            ServerError::Dataset(_) => "DATASET_UNAVAILABLE",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<QueryError> for ServerError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidPagination { .. } => ServerError::BadRequest(err.to_string()),
            QueryError::CityNotFound | QueryError::NameNotFound(_) => {
                ServerError::Missing(err.to_string())
            }
        }
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServerError::Internal(format!("worker task failed: {err}"))
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if let ServerError::Missing(message) = self {
            return Json(ErrorView::new(message)).into_response();
        }

        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
