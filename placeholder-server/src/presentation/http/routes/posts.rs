use axum::Router;
use axum::routing::{get, put};

use crate::presentation::AppState;
use crate::presentation::http::handlers::posts::{
    create_post, delete_post, list_posts, update_post,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", put(update_post).delete(delete_post))
}
