use crate::handlers::health::health_check;
use crate::schemas::AppState;
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router with all routes and middleware
///
/// The forecast API lives elsewhere; this router only serves the page,
/// the compiled frontend bundle and background images.
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    // Unknown paths get the entry page so the app can take over.
    let frontend = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_path()));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Background images
        .nest_service("/bgimg", ServeDir::new(&config.background_dir))
        // Page and bundle
        .fallback_service(frontend)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
