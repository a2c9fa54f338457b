use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::limit::ConcurrencyLimitLayer;

use crate::infrastructure::settings::Settings;

// body limit is enforced by the extractors: oversized bodies arrive as `JsonRejection`
pub(crate) fn apply_limits(router: Router, settings: &Settings) -> Router {
    router
        .layer(DefaultBodyLimit::max(settings.http_request_body_limit_bytes))
        .layer(ConcurrencyLimitLayer::new(settings.http_concurrency_limit))
}
