use axum::{Json, Router, extract::Request, routing::get};
use serde::Serialize;

use super::http::app_error::AppError;
use super::{AppState, http::routes};

pub(crate) const ROOT_MESSAGE: &str =
    "This is a sample application proxying the JsonPlaceholder API.";

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(health_handler))
        .merge(routes::router())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(fallback)
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "posts",
    responses(
        (status = 200, description = "Service description", body = String, content_type = "text/plain")
    )
)]
pub(crate) async fn root() -> &'static str {
    ROOT_MESSAGE
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}

async fn fallback(request: Request) -> AppError {
    tracing::debug!(uri = %request.uri(), "unknown route");
    AppError::NotFound
}

async fn method_not_allowed(request: Request) -> AppError {
    tracing::debug!(method = %request.method(), uri = %request.uri(), "method not allowed");
    AppError::MethodNotAllowed
}
