//! Public site index handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    response::Html,
    routing::get,
    Router,
};
use tracing::warn;

use common::AppResult;

use super::NewsPage;
use crate::middleware::Message;
use crate::state::AppState;
use crate::templating::Renderer;

/// Template rendered for the public index page.
pub const SITE_INDEX_TEMPLATE: &str = "site-theme/index.html.twig";

/// Renders the public index page.
pub struct IndexHandler {
    renderer: Arc<dyn Renderer>,
}

impl IndexHandler {
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self { renderer }
    }

    /// Render the index page with the request's message, if any.
    pub fn index(&self, msg: Option<String>) -> AppResult<String> {
        warn!("IndexHandler: index");

        let payload = NewsPage::new(msg).to_payload()?;
        self.renderer.render(SITE_INDEX_TEMPLATE, &payload)
    }
}

/// Create public site routes
pub fn index_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET /
pub async fn index(
    State(state): State<AppState>,
    message: Option<Extension<Message>>,
) -> AppResult<Html<String>> {
    let msg = message.map(|Extension(Message(msg))| msg);
    state.index.index(msg).map(Html)
}
