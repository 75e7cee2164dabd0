use anyhow::Context;

use usuarios_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    usuarios_observability::init();

    let config = ServerConfig::default();
    let app = usuarios_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
