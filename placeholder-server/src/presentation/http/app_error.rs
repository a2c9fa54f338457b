use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use placeholder_client::UpstreamError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Missing or invalid userId parameter")]
    InvalidUserId,

    #[error("Invalid post ID")]
    InvalidPostId,

    #[error("Invalid post data: {0}")]
    InvalidPostData(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

impl AppError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            AppError::InvalidUserId | AppError::InvalidPostId | AppError::InvalidPostData(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::Upstream(err) => upstream_failure(err),
        }
    }
}

// upstream statuses are not forwarded: every failure kind collapses to 500
fn upstream_failure(err: UpstreamError) -> (StatusCode, String) {
    match &err {
        UpstreamError::Http { status } => {
            error!(upstream_status = %status, "upstream rejected request");
        }
        UpstreamError::Network(detail) => {
            error!(%detail, "upstream unreachable");
        }
        UpstreamError::Unexpected(detail) => {
            error!(%detail, "unexpected upstream failure");
        }
    }
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        (status, Json(ErrorBody { error: msg })).into_response()
    }
}
