//! services/api/src/bin/front_door.rs
//!
//! Public entry point: proxies `/api/` to the gateway and serves the client bundle.

use api_lib::{
    config::ProxyConfig,
    error::ApiError,
    init_tracing,
    web::{front_door_router, state::ProxyState, static_files::Frontend},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let config = ProxyConfig::from_env()?;
    init_tracing(config.log_level);
    info!("Forwarding /api/ to {}", config.backend_url);

    let frontend = Frontend::discover(config.static_dirs.clone());
    let state = ProxyState::new(config.backend_url.clone())?;
    let app = front_door_router(state, &frontend);

    info!("Front door listening on {}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
