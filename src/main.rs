use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use cinematch_api::api::{create_router, AppState};
use cinematch_api::artifacts;
use cinematch_api::config::Config;
use cinematch_api::services::enrichment::TmdbClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinematch_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Artifacts must load before the listener binds; a process that cannot
    // rank has nothing to serve.
    let (catalog, matrix) = artifacts::load(&config)
        .await
        .context("failed to load recommendation artifacts")?;

    let posters = TmdbClient::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.tmdb_image_base.clone(),
        Duration::from_secs(config.tmdb_timeout_secs),
    )
    .context("failed to build TMDB client")?;

    let state = AppState::new(catalog, matrix, Arc::new(posters));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
