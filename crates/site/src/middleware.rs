//! Language negotiation middleware.
//!
//! Resolves the active language for each request: URL prefix → Accept-Language
//! → default. Routing for prefixed paths (e.g. `/zh/positions`) is handled by
//! nesting the page routes under each non-default language prefix; this
//! middleware only decides which language the matched handler renders in. The
//! default language never carries a prefix, preventing duplicate-content URLs.

use axum::{
    body::Body, extract::State, http::Request, middleware::Next, response::Response,
};

use crate::locale::Language;
use crate::state::AppState;

/// The resolved language for the current request.
///
/// Stored in request extensions for per-request access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLanguage(pub Language);

/// Extract a language code from a URL prefix.
///
/// Returns the language when the first path segment is a known non-default
/// language code followed by `/` or end-of-path. The default language is
/// skipped so `/en/about` is never a valid alias for `/about`.
pub fn extract_prefix(path: &str, default_language: Language) -> Option<Language> {
    let trimmed = path.strip_prefix('/')?;

    let candidate = match trimmed.find('/') {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    };

    let language = Language::from_code(candidate)?;
    if language == default_language {
        return None;
    }
    Some(language)
}

/// Parse an Accept-Language header value into (language, quality) pairs,
/// sorted by quality descending (stable sort preserves original order for ties).
fn parse_accept_language(header: &str) -> Vec<(String, f32)> {
    let mut langs: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let part = part.trim();
            if part.is_empty() {
                return None;
            }

            let mut segments = part.split(';');
            let lang = segments.next()?.trim().to_lowercase();

            let quality = segments
                .find_map(|s| {
                    let s = s.trim();
                    s.strip_prefix("q=")
                        .and_then(|q| q.trim().parse::<f32>().ok())
                })
                .unwrap_or(1.0)
                .clamp(0.0, 1.0); // RFC 7231 §5.3.1: quality values are 0.000–1.000

            Some((lang, quality))
        })
        .collect();

    langs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    langs
}

/// Negotiate a language from the Accept-Language header.
///
/// Tries exact codes first, then primary subtags ("zh-TW" → "zh").
fn negotiate_accept_language(header: &str) -> Option<Language> {
    for (lang, _quality) in parse_accept_language(header) {
        if let Some(language) = Language::from_code(&lang) {
            return Some(language);
        }
        if let Some(primary) = lang.split('-').next()
            && let Some(language) = Language::from_code(primary)
        {
            return Some(language);
        }
    }
    None
}

/// Paths that always render in the default language and skip negotiation.
fn is_system_path(path: &str) -> bool {
    path.starts_with("/static/") || path == "/health"
}

/// Middleware to negotiate the active language for each request.
pub async fn negotiate_language(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let default_language = state.default_language();
    let path = request.uri().path();

    if is_system_path(path) {
        request
            .extensions_mut()
            .insert(ResolvedLanguage(default_language));
        return next.run(request).await;
    }

    // URL prefix wins over the Accept-Language header.
    let mut resolved = extract_prefix(path, default_language);

    if resolved.is_none()
        && let Some(header) = request
            .headers()
            .get("accept-language")
            .and_then(|v| v.to_str().ok())
    {
        resolved = negotiate_accept_language(header);
    }

    let language = resolved.unwrap_or(default_language);
    request.extensions_mut().insert(ResolvedLanguage(language));

    next.run(request).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn prefix_extraction() {
        assert_eq!(
            extract_prefix("/zh/positions", Language::En),
            Some(Language::Zh)
        );
        assert_eq!(extract_prefix("/zh", Language::En), Some(Language::Zh));
        assert_eq!(extract_prefix("/positions", Language::En), None);
    }

    #[test]
    fn default_language_prefix_is_not_an_alias() {
        assert_eq!(extract_prefix("/en/positions", Language::En), None);
    }

    #[test]
    fn prefix_requires_a_segment_boundary() {
        // "/zhongshan" must not match the "zh" prefix.
        assert_eq!(extract_prefix("/zhongshan", Language::En), None);
    }

    #[test]
    fn accept_language_quality_ordering() {
        let parsed = parse_accept_language("en;q=0.5, zh-TW;q=0.9, fr;q=0.1");
        assert_eq!(parsed[0].0, "zh-tw");
        assert_eq!(parsed[1].0, "en");
    }

    #[test]
    fn accept_language_primary_subtag_fallback() {
        assert_eq!(
            negotiate_accept_language("zh-TW,zh;q=0.9,en;q=0.8"),
            Some(Language::Zh)
        );
        assert_eq!(negotiate_accept_language("fr-FR,de;q=0.8"), None);
    }

    #[test]
    fn accept_language_clamps_out_of_range_quality() {
        let parsed = parse_accept_language("en;q=9.0, zh;q=0.5");
        assert_eq!(parsed[0].0, "en");
        assert!((parsed[0].1 - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn system_paths() {
        assert!(is_system_path("/static/site.css"));
        assert!(is_system_path("/health"));
        assert!(!is_system_path("/positions"));
    }
}
