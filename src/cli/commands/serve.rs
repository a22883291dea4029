use anyhow::Result;
use std::path::Path;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{HostConfig, HostOverrides};
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config_file: &Path, overrides: HostOverrides) -> Result<()> {
    trace!("Entering serve function");
    info!("SkyCast host starting up");

    // Resolve configuration
    let config = HostConfig::load(config_file)?.with_overrides(overrides);
    debug!("Effective configuration: {:?}", config);

    let addr = match config.validate() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    // Create router
    trace!("Creating application router");
    let static_dir = config.static_dir.clone();
    let app = create_router(AppState::new(config));
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    info!("SkyCast running on http://{}", addr);
    info!("Serving frontend from {}", static_dir.display());

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
