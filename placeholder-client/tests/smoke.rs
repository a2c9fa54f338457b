use placeholder_client::{Post, UpstreamClient, UpstreamError};

fn live_client() -> UpstreamClient {
    let base_url = std::env::var("UPSTREAM_BASE_URL")
        .unwrap_or_else(|_| placeholder_client::DEFAULT_BASE_URL.to_string());
    UpstreamClient::new(base_url, placeholder_client::DEFAULT_TIMEOUT)
        .expect("client must build")
}

#[tokio::test]
#[ignore = "requires network access to the upstream API"]
async fn live_smoke_flow() {
    let client = live_client();

    let posts = client.list_posts().await.expect("list_posts must succeed");
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|post| post.id.is_some()));

    let comments = client
        .list_comments_by_user(1)
        .await
        .expect("list_comments_by_user must succeed");
    assert!(comments.iter().all(|comment| comment.id > 0));

    let created = client
        .create_post(&Post::draft(1, "smoke title", "smoke body"))
        .await
        .expect("create_post must succeed");
    assert!(created.id.is_some());
    assert_eq!(created.title, "smoke title");

    let updated = client
        .update_post(1, &Post::draft(1, "smoke title updated", "smoke body updated"))
        .await
        .expect("update_post must succeed");
    assert_eq!(updated.title, "smoke title updated");

    client.delete_post(1).await.expect("delete_post must succeed");
}

#[tokio::test]
#[ignore = "requires network access to the upstream API"]
async fn live_unknown_post_update_is_http_error() {
    let client = live_client();

    let result = client
        .update_post(1_000_000, &Post::draft(1, "t", "b"))
        .await;
    assert!(matches!(result, Err(UpstreamError::Http { .. })));
}
