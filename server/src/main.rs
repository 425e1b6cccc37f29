use anyhow::Context;
use deducia::ApplicationRuntime;
use deducia_server::routes;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = deducia::config::load();

    let runtime = ApplicationRuntime::new(&config)
        .context("Unable to initialise the platform runtime")?;
    info!("Successfully connected to the database");

    let app = routes::create_router(Arc::new(runtime));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Unable to bind to {addr}"))?;
    info!("Server running on port {}", config.server.port);

    axum::serve(listener, app).await.context("Server terminated")?;
    Ok(())
}
