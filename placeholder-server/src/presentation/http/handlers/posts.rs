use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use placeholder_client::Post;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppError, AppResult, ErrorBody};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<i32>,
    pub(crate) user_id: i32,
    pub(crate) title: String,
    pub(crate) body: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            body: post.body,
        }
    }
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            title: dto.title,
            body: dto.body,
        }
    }
}

fn post_id(path: Result<Path<i32>, PathRejection>) -> AppResult<i32> {
    path.map(|Path(id)| id).map_err(|_| AppError::InvalidPostId)
}

fn post_draft(body: Result<Json<PostDto>, JsonRejection>) -> AppResult<Post> {
    body.map(|Json(dto)| Post::from(dto)).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::InvalidPostData(rejection.body_text())
        }
    })
}

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    responses(
        (status = 200, description = "Posts listed", body = Vec<PostDto>),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state.gateway.list_posts().await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = PostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid post data", body = ErrorBody),
        (status = 413, description = "Body over the configured limit", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<PostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let draft = post_draft(body)?;

    let created = state.gateway.create_post(draft).await?;
    Ok((StatusCode::CREATED, Json(PostDto::from(created))))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = i32, Path, description = "Post id")
    ),
    request_body = PostDto,
    responses(
        (status = 200, description = "Post replaced", body = PostDto),
        (status = 400, description = "Invalid post id or data", body = ErrorBody),
        (status = 413, description = "Body over the configured limit", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<PostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let id = post_id(path)?;
    let draft = post_draft(body)?;

    let updated = state.gateway.update_post(id, draft).await?;
    Ok((StatusCode::OK, Json(PostDto::from(updated))))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(
        ("id" = i32, Path, description = "Post id")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Invalid post id", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = post_id(path)?;

    state.gateway.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
