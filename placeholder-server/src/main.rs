use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use placeholder_client::UpstreamClient;
use tracing::info;

mod data;
mod infrastructure;
mod presentation;
mod server;

use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let upstream = Arc::new(
        UpstreamClient::new(
            settings.upstream_base_url.clone(),
            Duration::from_secs(settings.upstream_timeout_secs),
        )
        .context("failed to build upstream HTTP client")?,
    );
    info!(
        base_url = upstream.base_url(),
        timeout_secs = settings.upstream_timeout_secs,
        "upstream client ready"
    );

    let state = AppState::new(upstream.clone());
    server::run_http(&settings, state).await?;

    drop(upstream);
    info!("upstream client released");
    Ok(())
}
