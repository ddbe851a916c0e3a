use axum_helpers::{create_app, health_router};
use domain_products::{InMemoryProductRepository, ProductService, handlers};
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for readable error output
    config::install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;
    config::init_tracing(&config.environment);

    // One store instance per process, constructed explicitly and injected
    // into the service at startup
    let repository = InMemoryProductRepository::new();
    let service = ProductService::new(repository);

    let router = handlers::router(service)
        .merge(health_router(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        ))
        .layer(TraceLayer::new_for_http());

    info!("Starting products API");
    create_app(router, &config.server.address())
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
