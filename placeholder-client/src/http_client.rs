use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{UpstreamError, UpstreamResult};
use crate::models::{Comment, Post};

/// Адрес upstream-сервиса по умолчанию.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Таймаут одного запроса к upstream по умолчанию.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
/// HTTP-клиент upstream API постов и комментариев.
///
/// Внутри держит один `reqwest::Client` с пулом соединений; клонирование дешёвое,
/// клоны разделяют пул.
pub struct UpstreamClient {
    base_url: String,
    client: Client,
}

impl UpstreamClient {
    /// Создаёт клиент с базовым адресом upstream и таймаутом на каждый запрос.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> UpstreamResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::from_reqwest)?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Клиент для публичного JSONPlaceholder с таймаутом 10 секунд.
    pub fn with_defaults() -> UpstreamResult<Self> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Базовый адрес upstream.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "upstream request");
        self.client.request(method, self.endpoint(path))
    }

    /// отправляет запрос и отсекает не-2xx ответы
    async fn send(request: RequestBuilder) -> UpstreamResult<Response> {
        let response = request.send().await.map_err(|err| {
            let err = UpstreamError::from_reqwest(err);
            warn!(error = %err, "upstream call failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %response.url(), "upstream returned error status");
            return Err(UpstreamError::Http { status });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> UpstreamResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(UpstreamError::from_reqwest)?;

        serde_json::from_slice(&bytes).map_err(|err| {
            let err = UpstreamError::from_decode(err);
            warn!(error = %err, "upstream body rejected");
            err
        })
    }

    /// Возвращает все посты в порядке upstream.
    pub async fn list_posts(&self) -> UpstreamResult<Vec<Post>> {
        let response = Self::send(self.request(Method::GET, "/posts")).await?;
        Self::decode(response).await
    }

    /// Возвращает комментарии, отфильтрованные по `userId`. Список может быть пустым.
    pub async fn list_comments_by_user(&self, user_id: i32) -> UpstreamResult<Vec<Comment>> {
        let request = self
            .request(Method::GET, "/comments")
            .query(&[("userId", user_id)]);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    /// Создаёт пост из черновика; upstream назначает `id`.
    pub async fn create_post(&self, draft: &Post) -> UpstreamResult<Post> {
        let request = self.request(Method::POST, "/posts").json(draft);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    /// Полностью заменяет пост с идентификатором `id`.
    pub async fn update_post(&self, id: i32, draft: &Post) -> UpstreamResult<Post> {
        let request = self
            .request(Method::PUT, &format!("/posts/{id}"))
            .json(draft);
        let response = Self::send(request).await?;
        Self::decode(response).await
    }

    /// Удаляет пост по идентификатору. Тело ответа игнорируется.
    pub async fn delete_post(&self, id: i32) -> UpstreamResult<()> {
        Self::send(self.request(Method::DELETE, &format!("/posts/{id}"))).await?;
        Ok(())
    }
}
