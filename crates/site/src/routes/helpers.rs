//! Shared route helpers for page rendering.

use crate::locale::Language;
use crate::state::AppState;

/// Inject site-wide context variables into a Tera context.
///
/// Adds: `lang`, `html_lang`, `site_name`, `site_tagline`, `nav`,
/// `social_links`, `language_toggle`, `current_year`.
pub fn inject_site_context(
    state: &AppState,
    language: Language,
    path: &str,
    context: &mut tera::Context,
) {
    context.insert("lang", language.code());
    context.insert("html_lang", language.html_lang());

    context.insert("site_name", &state.locale().translate("brand.name", language));
    context.insert(
        "site_tagline",
        &state.locale().translate("brand.tagline", language),
    );

    let nav = state
        .nav()
        .localized(|key| state.locale().translate(key, language), language, path);
    context.insert("nav", &nav);
    context.insert("social_links", state.nav().social());

    // Header toggle linking to the same page in the other language.
    let other = language.toggle();
    context.insert(
        "language_toggle",
        &serde_json::json!({
            "label": other.switcher_label(),
            "href": other.href(path),
        }),
    );

    context.insert("current_year", &chrono::Utc::now().format("%Y").to_string());
}
