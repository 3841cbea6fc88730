//! Digital Nomads Taiwan website.
//!
//! Bilingual (English / Traditional Chinese) marketing and recruitment site:
//! server-rendered pages over a fixed in-memory catalog of listings, with a
//! pure filter engine (the `dnt-catalog` crate) behind the positions page.

pub mod config;
pub mod error;
pub mod locale;
pub mod menu;
pub mod middleware;
pub mod routes;
pub mod seo;
pub mod state;
pub mod theme;

use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::locale::Language;
use crate::state::AppState;

/// Build the application router with all routes and middleware.
///
/// Page routes are registered once per language: unprefixed for the default
/// language and nested under `/{code}` for every other language. The
/// negotiation middleware reads the prefix (or Accept-Language) and stores the
/// resolved language in request extensions; nesting strips the prefix before
/// the handlers run.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(state.config());

    let pages = Router::new()
        .merge(routes::front::router())
        .merge(routes::positions::router())
        .merge(routes::about::router())
        .merge(routes::apply::router())
        .merge(routes::contact::router());

    let mut router = Router::new().merge(pages.clone());
    for language in Language::ALL {
        if language != state.default_language() {
            router = router.nest(&format!("/{}", language.code()), pages.clone());
        }
    }

    router
        .merge(routes::health::router())
        .merge(routes::static_files::router())
        // Middleware layers (last added = first executed in request flow):
        // TraceLayer → CORS → language negotiation → routes
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::negotiate_language,
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &config::Config) -> CorsLayer {
    let methods = [Method::GET, Method::HEAD, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    }
}
