use axum::Router;

use crate::presentation::AppState;

pub(crate) mod comments;
pub(crate) mod posts;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/posts", posts::router())
        .nest("/api/comments", comments::router())
}
