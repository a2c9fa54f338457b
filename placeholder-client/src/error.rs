use thiserror::Error;

#[derive(Debug, Error)]
/// Классифицированный отказ операции upstream-клиента.
pub enum UpstreamError {
    /// Upstream ответил статусом вне диапазона 2xx.
    #[error("upstream returned HTTP {status}")]
    Http {
        /// Точный статус ответа upstream.
        status: reqwest::StatusCode,
    },

    /// Сбой соединения, DNS, таймаут или обрыв тела ответа.
    #[error("upstream request failed: {0}")]
    Network(String),

    /// Некорректное тело ответа или любая другая неклассифицированная ошибка.
    #[error("unexpected upstream response: {0}")]
    Unexpected(String),
}

/// Результат операций upstream-клиента.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

impl UpstreamError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Http { status };
        }
        if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
            return Self::Network(err.to_string());
        }
        Self::Unexpected(err.to_string())
    }

    pub(crate) fn from_decode(err: serde_json::Error) -> Self {
        Self::Unexpected(format!("malformed response body: {err}"))
    }

    /// Возвращает статус upstream, если ошибка вызвана HTTP-ответом.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http { status } => Some(*status),
            Self::Network(_) | Self::Unexpected(_) => None,
        }
    }
}
