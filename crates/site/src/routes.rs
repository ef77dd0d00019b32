//! Route configuration.

use axum::{middleware, Router};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use common::AppError;

use crate::handlers::{admin_routes, health_routes, index_routes};
use crate::middleware::{error_details_middleware, message_middleware};
use crate::state::AppState;

/// First path segments owned by the site's own routes.
const RESERVED_SEGMENTS: &[&str] = &["admin", "health"];

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health check
        .nest("/health", health_routes())
        // Public site
        .merge(index_routes())
        // Admin
        .nest("/admin", admin_routes());

    // Static assets
    if let Some((path, base)) = state.settings.assets.mount() {
        match asset_prefix(base) {
            Ok(prefix) => {
                info!("Serving assets from {} at {}", path, prefix);
                router = router.nest_service(&prefix, ServeDir::new(path));
            }
            Err(reason) => {
                warn!("ASSETS_BASE '{}' {}, assets are not served", base, reason);
            }
        }
    }

    router
        .fallback(|| async { AppError::NotFound })
        .layer(middleware::from_fn(message_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_details_middleware,
        ))
        .with_state(state)
}

/// Normalize `ASSETS_BASE` into a route prefix the router can mount.
///
/// Only plain path prefixes are accepted: no URLs, no route parameters or
/// wildcards, and nothing below the site's own routes.
fn asset_prefix(base: &str) -> Result<String, &'static str> {
    if base.contains("://") || base.starts_with("//") {
        return Err("is a URL, not a path");
    }

    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        return Err("must not be the site root");
    }

    for segment in trimmed.split('/') {
        if segment.is_empty() {
            return Err("must not contain empty segments");
        }
        if segment.contains(|c: char| matches!(c, '*' | ':' | '{' | '}' | '?' | '#')) {
            return Err("must not contain route parameters or wildcards");
        }
    }

    let first = trimmed.split('/').next().unwrap_or_default();
    if RESERVED_SEGMENTS.contains(&first) {
        return Err("collides with a site route");
    }

    Ok(format!("/{}", trimmed))
}
