use anyhow::{Context, Result, anyhow};
use placeholder_client::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) http_addr: String,
    pub(crate) upstream_base_url: String,
    pub(crate) upstream_timeout_secs: u64,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) log_level: String,
    pub(crate) http_request_body_limit_bytes: usize,
    pub(crate) http_concurrency_limit: usize,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let upstream_base_url = parse_base_url(
            std::env::var("UPSTREAM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        )
        .context("UPSTREAM_BASE_URL is invalid")?;
        let upstream_timeout_secs = parse_u64_env("UPSTREAM_TIMEOUT_SECS", 10)?;
        let cors_origins =
            parse_cors_origins(std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());
        let http_request_body_limit_bytes =
            parse_usize_env("HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?;
        let http_concurrency_limit = parse_usize_env("HTTP_CONCURRENCY_LIMIT", 256)?;

        Ok(Self {
            http_addr,
            upstream_base_url,
            upstream_timeout_secs,
            cors_origins,
            log_level,
            http_request_body_limit_bytes,
            http_concurrency_limit,
        })
    }
}

fn parse_base_url(raw: String) -> Result<String> {
    let value = raw.trim().trim_end_matches('/').to_string();
    if value.is_empty() {
        return Err(anyhow!("must not be empty"));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(anyhow!("must start with http:// or https://, got '{value}'"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_usize_env(key: &str, default: usize) -> Result<usize> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<usize>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
