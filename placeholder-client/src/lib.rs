//! Клиентская библиотека upstream API постов и комментариев (JSONPlaceholder).
//!
//! Все операции возвращают `UpstreamResult<T>`: либо значение, либо
//! классифицированную ошибку `UpstreamError`:
//! - `Http` — upstream ответил не-2xx статусом
//! - `Network` — соединение, DNS, таймаут
//! - `Unexpected` — некорректное тело ответа и прочее
//!
//! Клиент не паникует и не повторяет запросы.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{UpstreamError, UpstreamResult};
pub use http_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, UpstreamClient};
pub use models::{Comment, Post};
