//! Theme engine with Tera templates and suggestion resolution.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use dashmap::DashMap;
use tera::Tera;
use tracing::debug;

use crate::locale::{Language, LocaleService};

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
    /// Cache mapping suggestion lists to resolved template names.
    suggestion_cache: DashMap<String, String>,
}

impl ThemeEngine {
    /// Create a new theme engine loading templates from the given directory.
    ///
    /// Registers the `t()` function backed by the locale service so templates
    /// translate interface strings directly.
    pub fn new(template_dir: &Path, locale: Arc<LocaleService>) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let mut tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;
        Self::register_functions(&mut tera, locale);

        let template_count = tera.get_template_names().count();
        debug!(count = template_count, "loaded templates");

        Ok(Self {
            tera,
            suggestion_cache: DashMap::new(),
        })
    }

    /// Create a theme engine with no templates (for testing).
    pub fn empty(locale: Arc<LocaleService>) -> Self {
        let mut tera = Tera::default();
        Self::register_functions(&mut tera, locale);
        Self {
            tera,
            suggestion_cache: DashMap::new(),
        }
    }

    /// Register custom Tera functions.
    fn register_functions(tera: &mut Tera, locale: Arc<LocaleService>) {
        let default_language = locale.default_language();
        tera.register_function(
            "t",
            move |args: &std::collections::HashMap<String, tera::Value>| {
                let key = args
                    .get("key")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| tera::Error::msg("t() requires a `key` argument"))?;

                let language = args
                    .get("lang")
                    .and_then(|v| v.as_str())
                    .and_then(Language::from_code)
                    .unwrap_or(default_language);

                Ok(tera::Value::String(locale.translate(key, language)))
            },
        );
    }

    /// Get the underlying Tera instance for custom operations.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Resolve the best template from a list of suggestions.
    ///
    /// Templates are tried in order; the first one that exists is returned.
    /// Results are cached for performance.
    pub fn resolve_template(&self, suggestions: &[&str]) -> Option<String> {
        if suggestions.is_empty() {
            return None;
        }

        let cache_key = suggestions.join("|");
        if let Some(cached) = self.suggestion_cache.get(&cache_key) {
            return Some(cached.clone());
        }

        for suggestion in suggestions {
            let template_name = format!("{suggestion}.html");
            if self.tera.get_template(&template_name).is_ok() {
                self.suggestion_cache
                    .insert(cache_key, template_name.clone());
                return Some(template_name);
            }
        }

        // Don't cache negative results to allow hot-reload
        None
    }

    /// Get page template suggestions based on path.
    ///
    /// `/positions` → `["page--positions", "page"]`
    pub fn page_suggestions(path: &str) -> Vec<String> {
        let mut suggestions = Vec::new();

        let normalized = path.trim_start_matches('/').replace('/', "--");
        if !normalized.is_empty() {
            suggestions.push(format!("page--{normalized}"));
        }
        suggestions.push("page".to_string());

        suggestions
    }

    /// Render a full page with pre-rendered content.
    pub fn render_page(
        &self,
        path: &str,
        title: &str,
        content: &str,
        context: &mut tera::Context,
    ) -> Result<String> {
        let suggestions = Self::page_suggestions(path);
        let suggestion_refs: Vec<&str> = suggestions.iter().map(|s| s.as_str()).collect();

        let template = self
            .resolve_template(&suggestion_refs)
            .unwrap_or_else(|| "page.html".to_string());

        context.insert("title", title);
        context.insert("content", content);
        context.insert("path", path);

        self.tera
            .render(&template, context)
            .context("failed to render page template")
    }

    /// Clear the suggestion cache (useful for development hot-reload).
    pub fn clear_cache(&self) {
        self.suggestion_cache.clear();
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .field("cache_size", &self.suggestion_cache.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn empty_locale() -> Arc<LocaleService> {
        // No locale files on disk: translate() falls back to the key itself.
        Arc::new(LocaleService::empty_for_tests(Language::En))
    }

    #[test]
    fn page_suggestions_most_specific_first() {
        assert_eq!(
            ThemeEngine::page_suggestions("/positions"),
            vec!["page--positions", "page"]
        );
        assert_eq!(ThemeEngine::page_suggestions("/"), vec!["page"]);
    }

    #[test]
    fn resolve_template_picks_first_existing() {
        let mut engine = ThemeEngine::empty(empty_locale());
        engine
            .tera
            .add_raw_template("page.html", "{{ content | safe }}")
            .unwrap();

        let resolved = engine.resolve_template(&["page--positions", "page"]);
        assert_eq!(resolved, Some("page.html".to_string()));

        // Second lookup hits the cache.
        let resolved = engine.resolve_template(&["page--positions", "page"]);
        assert_eq!(resolved, Some("page.html".to_string()));
    }

    #[test]
    fn t_function_falls_back_to_key() {
        let mut engine = ThemeEngine::empty(empty_locale());
        engine
            .tera
            .add_raw_template("test", r#"{{ t(key="nav.home", lang="zh") }}"#)
            .unwrap();
        let rendered = engine.tera.render("test", &tera::Context::new()).unwrap();
        assert_eq!(rendered, "nav.home");
    }

    #[test]
    fn render_page_inserts_title_and_content() {
        let mut engine = ThemeEngine::empty(empty_locale());
        engine
            .tera
            .add_raw_template("page.html", "<h1>{{ title }}</h1>{{ content | safe }}")
            .unwrap();

        let mut context = tera::Context::new();
        let html = engine
            .render_page("/positions", "Positions", "<p>cards</p>", &mut context)
            .unwrap();
        assert_eq!(html, "<h1>Positions</h1><p>cards</p>");
    }
}
