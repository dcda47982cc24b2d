use std::sync::Arc;

use anyhow::Context;
use meer_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    meer_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let services = meer_api::app::services::build_services(&config).await?;
    let app = meer_api::app::build_app(Arc::new(services));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
