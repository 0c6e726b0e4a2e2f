use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use gstat_api::ApiFootballClient;
use gstat_config::Config;
use gstat_quota::QuotaLedger;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod args;
mod lookup;
mod render;
mod server;
mod state;

#[cfg(test)]
mod tests;

use self::args::Args;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();

    let args = Args::parse();

    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(path) = args.quota_file {
        config.quota.file = path;
    }

    if config.api.key.is_empty() {
        tracing::warn!("GSTAT_API_KEY is not set; provider calls will be rejected");
    }

    let api = ApiFootballClient::new(
        &config.api.key,
        &config.api.host,
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("failed to build the API client")?;

    let quota = QuotaLedger::load(config.quota.file.clone(), config.quota.daily_limit)
        .await
        .context("failed to load the quota ledger")?;
    tracing::info!(
        "daily budget: {} calls, ledger at {}",
        config.quota.daily_limit,
        config.quota.file.display()
    );

    let state = Arc::new(AppState::new(config, Arc::new(api), quota));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    tracing::info!("shutdown requested");
}
