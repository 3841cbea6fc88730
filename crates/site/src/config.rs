//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Path to the Tera templates directory (default: ./templates).
    pub templates_dir: PathBuf,

    /// Path to the static assets directory (default: ./static).
    pub static_dir: PathBuf,

    /// Path to the locale JSON files directory (default: ./locales).
    pub locales_dir: PathBuf,

    /// Public site URL for canonical links and structured data.
    pub site_url: String,

    /// Default language code (default: "en").
    pub default_language: String,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,

    /// Google Analytics measurement id. When None, the GA snippet is omitted.
    pub ga_measurement_id: Option<String>,

    /// Google Tag Manager container id. When None, the GTM snippet is omitted.
    pub gtm_container_id: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let templates_dir = env::var("TEMPLATES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./templates"));

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./static"));

        let locales_dir = env::var("LOCALES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./locales"));

        let site_url = env::var("SITE_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));

        let default_language = env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let ga_measurement_id = env::var("GA_MEASUREMENT_ID").ok().filter(|v| !v.is_empty());
        let gtm_container_id = env::var("GTM_CONTAINER_ID").ok().filter(|v| !v.is_empty());

        Ok(Self {
            port,
            templates_dir,
            static_dir,
            locales_dir,
            site_url,
            default_language,
            cors_allowed_origins,
            ga_measurement_id,
            gtm_container_id,
        })
    }
}
