use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use placeholder_client::{Comment, Post, UpstreamError, UpstreamResult};
use tower::ServiceExt;

use crate::data::posts_gateway::PostsGateway;
use crate::presentation::AppState;
use crate::server::build_router;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Mode {
    Succeed,
    Empty,
    HttpStatus(StatusCode),
    Network,
    Unexpected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ListPosts,
    ListComments(i32),
    CreatePost(Post),
    UpdatePost(i32),
    DeletePost(i32),
}

#[derive(Clone)]
pub(crate) struct FakeGateway {
    mode: Mode,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl FakeGateway {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            mode,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn state(&self) -> AppState {
        AppState::new(Arc::new(self.clone()))
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record<T>(&self, call: Call, value: impl FnOnce() -> T) -> UpstreamResult<T> {
        self.calls.lock().expect("calls lock").push(call);
        match self.mode {
            Mode::Succeed | Mode::Empty => Ok(value()),
            Mode::HttpStatus(status) => Err(UpstreamError::Http { status }),
            Mode::Network => Err(UpstreamError::Network("connection refused".to_string())),
            Mode::Unexpected => Err(UpstreamError::Unexpected(
                "malformed response body".to_string(),
            )),
        }
    }

    fn empty(&self) -> bool {
        matches!(self.mode, Mode::Empty)
    }
}

fn stored_post(id: i32) -> Post {
    Post {
        id: Some(id),
        user_id: 1,
        title: format!("title {id}"),
        body: format!("body {id}"),
    }
}

#[async_trait]
impl PostsGateway for FakeGateway {
    async fn list_posts(&self) -> UpstreamResult<Vec<Post>> {
        let empty = self.empty();
        self.record(Call::ListPosts, || {
            if empty {
                Vec::new()
            } else {
                vec![stored_post(1), stored_post(2)]
            }
        })
    }

    async fn list_comments_by_user(&self, user_id: i32) -> UpstreamResult<Vec<Comment>> {
        let empty = self.empty();
        self.record(Call::ListComments(user_id), || {
            if empty {
                Vec::new()
            } else {
                vec![Comment {
                    id: 1,
                    post_id: 1,
                    name: "name".to_string(),
                    email: "user@example.com".to_string(),
                    body: "comment".to_string(),
                }]
            }
        })
    }

    async fn create_post(&self, draft: Post) -> UpstreamResult<Post> {
        self.record(Call::CreatePost(draft.clone()), || Post {
            id: Some(101),
            ..draft
        })
    }

    async fn update_post(&self, id: i32, draft: Post) -> UpstreamResult<Post> {
        self.record(Call::UpdatePost(id), || Post {
            id: Some(id),
            ..draft
        })
    }

    async fn delete_post(&self, id: i32) -> UpstreamResult<()> {
        self.record(Call::DeletePost(id), || ())
    }
}

pub(crate) async fn request(
    router: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body)).expect("request must build");

    router.oneshot(request).await.expect("router is infallible")
}

pub(crate) async fn send_raw(
    gateway: &FakeGateway,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Bytes) {
    let response = request(
        build_router(gateway.state()),
        method,
        uri,
        content_type,
        body.to_string(),
    )
    .await;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body must be readable");
    (status, bytes)
}

/// Sends a request through the full router; a `Some` body is sent as JSON.
pub(crate) async fn send(
    gateway: &FakeGateway,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Bytes) {
    match body {
        Some(body) => send_raw(gateway, method, uri, Some("application/json"), body).await,
        None => send_raw(gateway, method, uri, None, "").await,
    }
}
