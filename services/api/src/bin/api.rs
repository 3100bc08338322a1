//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{CatalogStore, MemoryAccountStore},
    config::Config,
    error::ApiError,
    web::{self, state::AppState, token::TokenService, ApiDoc},
};
use basket_core::ports::AccountStore;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Load the Static Catalog ---
    // A missing or malformed catalog is fatal; there is no degraded mode.
    let catalog = Arc::new(CatalogStore::load(&config.catalog_dir)?);
    info!(
        categories = catalog.categories().len(),
        products = catalog.products().len(),
        "Catalog loaded"
    );

    // --- 3. Initialize the Account Store & Token Service ---
    let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
    let tokens = Arc::new(TokenService::new(
        &config.jwt_secret,
        config.token_ttl_days,
    ));

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        store,
        catalog,
        tokens,
        config: config.clone(),
    });

    // --- 5. Create the Web Router ---
    // Merge the API router with the Swagger UI router for a complete application.
    let app = web::router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
