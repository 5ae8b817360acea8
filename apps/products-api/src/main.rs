//! Products API - JSON API and product pages over an in-memory store

use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    info!(
        seeded = state.config.seed_products,
        products = state.repository.len().await,
        "Product store ready"
    );

    let router =
        create_router::<openapi::ApiDoc>(api::routes(&state), api::pages(&state)).await?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let store = state.repository.clone();
    create_production_app(
        router,
        &state.config.server,
        state.config.shutdown_timeout,
        async move {
            let products = store.len().await;
            info!(products, "Dropping in-memory product store");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
