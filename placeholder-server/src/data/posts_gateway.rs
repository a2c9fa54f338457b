use async_trait::async_trait;
use placeholder_client::{Comment, Post, UpstreamResult};

#[async_trait]
pub(crate) trait PostsGateway: Send + Sync {
    async fn list_posts(&self) -> UpstreamResult<Vec<Post>>;
    async fn list_comments_by_user(&self, user_id: i32) -> UpstreamResult<Vec<Comment>>;
    async fn create_post(&self, draft: Post) -> UpstreamResult<Post>;
    async fn update_post(&self, id: i32, draft: Post) -> UpstreamResult<Post>;
    async fn delete_post(&self, id: i32) -> UpstreamResult<()>;
}
