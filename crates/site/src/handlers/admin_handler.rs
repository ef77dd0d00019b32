//! Admin index handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    response::Html,
    routing::get,
    Router,
};

use common::AppResult;

use super::NewsPage;
use crate::middleware::Message;
use crate::state::AppState;
use crate::templating::Renderer;

/// Template rendered for the admin index page.
pub const ADMIN_INDEX_TEMPLATE: &str = "index.html.twig";

/// Renders the admin index page.
pub struct AdminHandler {
    renderer: Arc<dyn Renderer>,
}

impl AdminHandler {
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self { renderer }
    }

    pub fn index(&self, msg: Option<String>) -> AppResult<String> {
        let payload = NewsPage::new(msg).to_payload()?;
        self.renderer.render(ADMIN_INDEX_TEMPLATE, &payload)
    }
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET /admin
pub async fn index(
    State(state): State<AppState>,
    message: Option<Extension<Message>>,
) -> AppResult<Html<String>> {
    let msg = message.map(|Extension(Message(msg))| msg);
    state.admin.index(msg).map(Html)
}
