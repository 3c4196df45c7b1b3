//! services/api/src/bin/api.rs

use api_lib::{
    adapters::TokioClock,
    config::Config,
    error::ApiError,
    init_tracing,
    web::{gateway_router, state::AppState, static_files::Frontend},
};
use hr_portal_core::simulated::FixtureDirectory;
use std::{sync::Arc, time::Duration};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    init_tracing(config.log_level);
    info!("Configuration loaded. Starting server...");

    // --- 2. Locate the Client Bundle ---
    let frontend = Arc::new(Frontend::discover(config.static_dirs.clone()));

    // --- 3. Build the Shared AppState ---
    // The gateway answers straight from the fixtures, without simulated latency.
    let directory = Arc::new(FixtureDirectory::new(Arc::new(TokioClock), Duration::ZERO));
    let app_state = AppState {
        directory,
        frontend,
    };

    // --- 4. Create the Web Router ---
    let app = gateway_router(app_state);

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
