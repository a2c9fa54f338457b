use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use placeholder_client::Comment;
use serde::Serialize;
use utoipa::ToSchema;

use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppError, AppResult, ErrorBody};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentDto {
    pub(crate) id: i32,
    pub(crate) post_id: i32,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) body: String,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            name: comment.name,
            email: comment.email,
            body: comment.body,
        }
    }
}

// repeated keys are allowed; the first `userId` wins
fn user_id(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> AppResult<i32> {
    let Query(pairs) = query.map_err(|_| AppError::InvalidUserId)?;

    pairs
        .into_iter()
        .find(|(key, _)| key == "userId")
        .and_then(|(_, value)| value.parse::<i32>().ok())
        .ok_or(AppError::InvalidUserId)
}

#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "comments",
    params(
        ("userId" = i32, Query, description = "Author of the commented posts")
    ),
    responses(
        (status = 200, description = "Comments of the user's posts", body = Vec<CommentDto>),
        (status = 400, description = "Missing or invalid userId", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    )
)]
pub(crate) async fn list_comments(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<(StatusCode, Json<Vec<CommentDto>>)> {
    let user_id = user_id(query)?;

    let comments = state.gateway.list_comments_by_user(user_id).await?;
    Ok((
        StatusCode::OK,
        Json(comments.into_iter().map(CommentDto::from).collect()),
    ))
}
