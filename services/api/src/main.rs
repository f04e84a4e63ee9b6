use anyhow::Context as _;
use tracing::info;

use pulse_api::config::ApiConfig;
use pulse_api::infra::db::{DbDatabaseProbe, connect};
use pulse_api::router::build_router;
use pulse_api::state::AppState;
use pulse_core::shutdown::shutdown_signal;
use pulse_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ApiConfig::from_env().context("failed to load configuration")?;

    let db = connect(&config)
        .await
        .context("failed to create database pool")?;

    let state = AppState::new(DbDatabaseProbe { db }, config.service_info());

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        version = %config.app_version,
        environment = %config.environment,
        "api service listening on {addr}"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("api service stopped");
    Ok(())
}
