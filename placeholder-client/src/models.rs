use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Пост upstream-сервиса.
///
/// У черновика (`create_post`) `id` отсутствует и не сериализуется;
/// в ответах upstream он всегда заполнен.
pub struct Post {
    /// Идентификатор поста, назначенный upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Идентификатор автора.
    pub user_id: i32,
    /// Заголовок поста.
    pub title: String,
    /// Содержимое поста.
    pub body: String,
}

impl Post {
    /// Создаёт черновик поста без идентификатора.
    pub fn draft(user_id: i32, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Комментарий к посту. Только для чтения.
pub struct Comment {
    /// Идентификатор комментария.
    pub id: i32,
    /// Идентификатор поста, к которому относится комментарий.
    pub post_id: i32,
    /// Заголовок комментария.
    pub name: String,
    /// Email автора.
    pub email: String,
    /// Текст комментария.
    pub body: String,
}
