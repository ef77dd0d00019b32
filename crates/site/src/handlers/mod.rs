//! HTTP handlers.

mod admin_handler;
mod health_handler;
mod index_handler;

pub use admin_handler::{admin_routes, AdminHandler, ADMIN_INDEX_TEMPLATE};
pub use health_handler::health_routes;
pub use index_handler::{index_routes, IndexHandler, SITE_INDEX_TEMPLATE};

use serde::Serialize;
use serde_json::Value;

use common::{AppError, AppResult};

/// News block shown on the index pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct News {
    pub msg: Option<String>,
}

/// Template payload for the index pages: `{news: {msg}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsPage {
    pub news: News,
}

impl NewsPage {
    pub fn new(msg: Option<String>) -> Self {
        Self {
            news: News { msg },
        }
    }

    /// Convert to the JSON value handed to the renderer.
    pub fn to_payload(&self) -> AppResult<Value> {
        serde_json::to_value(self).map_err(|e| AppError::internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_with_message() {
        let payload = NewsPage::new(Some("hello".to_string())).to_payload().unwrap();
        assert_eq!(payload, json!({"news": {"msg": "hello"}}));
    }

    #[test]
    fn test_payload_without_message_is_null() {
        let payload = NewsPage::new(None).to_payload().unwrap();
        assert_eq!(payload, json!({"news": {"msg": null}}));
    }
}
