//! Server-rendered site.
//!
//! This crate provides the HTTP layer: page handlers, template rendering
//! and the middleware that feeds them.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templating;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use common::Settings;

use crate::routes::create_router;
use crate::state::AppState;
use crate::templating::TeraRenderer;

/// Run the HTTP server with the given settings.
pub async fn run(host: &str, port: u16, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Arc::new(settings);

    // Create renderer
    let renderer = Arc::new(TeraRenderer::from_settings(&settings)?);

    // Create app state
    let state = AppState::new(settings, renderer);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Site listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
