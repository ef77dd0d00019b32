//! Application state for dependency injection.

use std::sync::Arc;

use common::Settings;

use crate::handlers::{AdminHandler, IndexHandler};
use crate::templating::Renderer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub index: Arc<IndexHandler>,
    pub admin: Arc<AdminHandler>,
}

impl AppState {
    /// Create new app state, injecting the renderer into each handler.
    pub fn new(settings: Arc<Settings>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            settings,
            index: Arc::new(IndexHandler::new(renderer.clone())),
            admin: Arc::new(AdminHandler::new(renderer)),
        }
    }
}
