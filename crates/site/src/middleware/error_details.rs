//! Error detail display.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use common::ErrorReport;

use crate::state::AppState;

/// Replace error responses with their detailed form when error details are enabled.
pub async fn error_details_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if !state.settings.display_error_details {
        return response;
    }

    match response.extensions().get::<ErrorReport>().cloned() {
        Some(report) => report.into_verbose_response(),
        None => response,
    }
}
