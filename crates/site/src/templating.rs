//! HTML template rendering.
//!
//! Handlers depend on the [`Renderer`] trait; [`TeraRenderer`] is the
//! production implementation backed by Tera templates on disk.

use std::sync::RwLock;

use serde::Serialize;
use serde_json::Value;
use tera::{Context, Tera};
use tracing::debug;

use common::{AppError, AppResult, Settings};

#[cfg(test)]
use mockall::automock;

/// Renders a named template with a JSON payload.
#[cfg_attr(test, automock)]
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, payload: &Value) -> AppResult<String>;
}

/// Values exposed to every template as `app`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateGlobals {
    pub environment: String,
    pub domain: String,
    pub locale: String,
    pub timezone: Option<String>,
    pub assets_base: String,
}

impl From<&Settings> for TemplateGlobals {
    fn from(settings: &Settings) -> Self {
        Self {
            environment: settings.environment.to_string(),
            domain: settings.domain.clone(),
            locale: settings.effective_locale().to_string(),
            timezone: settings.effective_timezone().map(str::to_string),
            assets_base: settings.assets.base.clone(),
        }
    }
}

/// Tera-backed renderer.
pub struct TeraRenderer {
    tera: RwLock<Tera>,
    globals: TemplateGlobals,
    auto_reload: bool,
}

impl TeraRenderer {
    /// Load every template below `templates_path`.
    pub fn new(templates_path: &str, globals: TemplateGlobals, auto_reload: bool) -> AppResult<Self> {
        let glob = format!("{}/**/*", templates_path.trim_end_matches('/'));
        let mut tera = Tera::new(&glob)?;
        tera.autoescape_on(vec![".html", ".htm", ".xml", ".twig"]);

        debug!(
            templates = tera.get_template_names().count(),
            path = templates_path,
            "Templates loaded"
        );

        Ok(Self {
            tera: RwLock::new(tera),
            globals,
            auto_reload,
        })
    }

    /// Build the renderer from the templating section of the settings.
    ///
    /// Templates are reloaded on every render in development.
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        Self::new(
            settings.twig.templates_path(),
            TemplateGlobals::from(settings),
            settings.environment.is_development(),
        )
    }
}

impl Renderer for TeraRenderer {
    fn render(&self, template: &str, payload: &Value) -> AppResult<String> {
        if self.auto_reload {
            self.tera
                .write()
                .map_err(|_| AppError::internal("template registry lock poisoned"))?
                .full_reload()?;
        }

        let mut context = Context::from_value(payload.clone())?;
        context.insert("app", &self.globals);

        let tera = self
            .tera
            .read()
            .map_err(|_| AppError::internal("template registry lock poisoned"))?;

        Ok(tera.render(template, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates");

    fn globals() -> TemplateGlobals {
        TemplateGlobals {
            environment: "production".to_string(),
            domain: "example.com".to_string(),
            locale: "en_US".to_string(),
            timezone: None,
            assets_base: String::new(),
        }
    }

    #[test]
    fn test_renders_message() {
        let renderer = TeraRenderer::new(TEMPLATES, globals(), false).unwrap();
        let html = renderer
            .render("index.html.twig", &json!({"news": {"msg": "hello"}}))
            .unwrap();

        assert!(html.contains("hello"));
    }

    #[test]
    fn test_escapes_message() {
        let renderer = TeraRenderer::new(TEMPLATES, globals(), false).unwrap();
        let html = renderer
            .render(
                "site-theme/index.html.twig",
                &json!({"news": {"msg": "<script>alert(1)</script>"}}),
            )
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_null_message_renders() {
        let renderer = TeraRenderer::new(TEMPLATES, globals(), true).unwrap();
        let html = renderer
            .render("site-theme/index.html.twig", &json!({"news": {"msg": null}}))
            .unwrap();

        assert!(html.contains("example.com"));
    }

    #[test]
    fn test_lang_attribute_only_with_locale() {
        let renderer = TeraRenderer::new(TEMPLATES, globals(), false).unwrap();
        let payload = json!({"news": {"msg": null}});
        assert!(renderer
            .render("site-theme/index.html.twig", &payload)
            .unwrap()
            .contains(r#"<html lang="en_US">"#));

        let without_locale = TemplateGlobals {
            locale: String::new(),
            ..globals()
        };
        let renderer = TeraRenderer::new(TEMPLATES, without_locale, false).unwrap();
        for template in ["index.html.twig", "site-theme/index.html.twig"] {
            let html = renderer.render(template, &payload).unwrap();
            assert!(html.contains("<html>"), "{template} kept an empty lang");
            assert!(!html.contains(r#"lang="""#));
        }
    }

    #[test]
    fn test_missing_template_is_template_error() {
        let renderer = TeraRenderer::new(TEMPLATES, globals(), false).unwrap();
        let result = renderer.render("missing.html.twig", &json!({"news": {"msg": null}}));

        assert!(matches!(result, Err(AppError::Template(_))));
    }

    #[test]
    fn test_globals_from_settings() {
        let settings = Settings::from_lookup(|name| match name {
            "ENVIRONMENT" => Some("development".to_string()),
            "LOCALE_FALLBACK" => Some("en_GB".to_string()),
            "TIMEZONE" => Some("Europe/Lisbon".to_string()),
            _ => None,
        })
        .unwrap();

        let globals = TemplateGlobals::from(&settings);
        assert_eq!(globals.environment, "development");
        assert_eq!(globals.locale, "en_GB");
        assert_eq!(globals.timezone.as_deref(), Some("Europe/Lisbon"));
    }
}
