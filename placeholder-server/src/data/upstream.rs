use async_trait::async_trait;
use placeholder_client::{Comment, Post, UpstreamClient, UpstreamResult};

use crate::data::posts_gateway::PostsGateway;

#[async_trait]
impl PostsGateway for UpstreamClient {
    async fn list_posts(&self) -> UpstreamResult<Vec<Post>> {
        UpstreamClient::list_posts(self).await
    }

    async fn list_comments_by_user(&self, user_id: i32) -> UpstreamResult<Vec<Comment>> {
        UpstreamClient::list_comments_by_user(self, user_id).await
    }

    async fn create_post(&self, draft: Post) -> UpstreamResult<Post> {
        UpstreamClient::create_post(self, &draft).await
    }

    async fn update_post(&self, id: i32, draft: Post) -> UpstreamResult<Post> {
        UpstreamClient::update_post(self, id, &draft).await
    }

    async fn delete_post(&self, id: i32) -> UpstreamResult<()> {
        UpstreamClient::delete_post(self, id).await
    }
}
