//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use dnt_catalog::Catalog;

use crate::config::Config;
use crate::locale::{Language, LocaleService};
use crate::menu::NavRegistry;
use crate::seo::SeoService;
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap. Everything inside is
/// immutable after startup; the only interior mutability is the theme
/// engine's suggestion cache and the locale cache, both concurrent maps.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Application configuration.
    config: Config,

    /// Default language resolved from config.
    default_language: Language,

    /// Interface string translations.
    locale: Arc<LocaleService>,

    /// Theme engine for template rendering.
    theme: Arc<ThemeEngine>,

    /// The recruitment catalog.
    catalog: Arc<Catalog>,

    /// Site navigation.
    nav: Arc<NavRegistry>,

    /// SEO metadata and structured data.
    seo: Arc<SeoService>,
}

impl AppState {
    /// Create new application state, loading locales and templates from disk.
    pub fn new(config: &Config) -> Result<Self> {
        let default_language = Language::from_code(&config.default_language)
            .with_context(|| format!("unknown DEFAULT_LANGUAGE: {}", config.default_language))?;

        let locale = Arc::new(LocaleService::load(&config.locales_dir, default_language)?);
        let theme = Arc::new(ThemeEngine::new(&config.templates_dir, Arc::clone(&locale))?);
        let catalog = Arc::new(Catalog::builtin());
        let nav = Arc::new(NavRegistry::builtin());
        let seo = Arc::new(SeoService::new(config));

        info!(
            listings = catalog.len(),
            locale_strings = locale.len(),
            "application state initialized"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config: config.clone(),
                default_language,
                locale,
                theme,
                catalog,
                nav,
                seo,
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn default_language(&self) -> Language {
        self.inner.default_language
    }

    pub fn locale(&self) -> &LocaleService {
        &self.inner.locale
    }

    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }

    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    pub fn nav(&self) -> &NavRegistry {
        &self.inner.nav
    }

    pub fn seo(&self) -> &SeoService {
        &self.inner.seo
    }
}
