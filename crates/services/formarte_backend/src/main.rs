// File: services/formarte_backend/src/main.rs
use formarte_backend::app::build_app;
use formarte_common::{init_from_config, log_error, log_result, Context};
use formarte_config::load_config;
use formarte_storage::StoreFactory;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(load_config().context("Failed to load config")?);
    // Dropping the guard stops the file writer.
    let _log_guard = init_from_config(&config.logging);

    let kv = log_result(
        StoreFactory::new().create_store(&config.storage).await,
        "Storage ready",
        "Storage unavailable",
    )
    .with_context(|| format!("Failed to open storage at '{}'", config.storage.path))?;

    let app = build_app(config.clone(), kv).await;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        log_error(&e, "Server stopped");
        return Err(e.into());
    }
    Ok(())
}
