//! About page route handler.

use axum::{Extension, Router, extract::State, response::Html, routing::get};

use crate::error::AppResult;
use crate::middleware::ResolvedLanguage;
use crate::state::AppState;

use super::helpers::inject_site_context;

/// Create the about page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/about", get(about_page))
}

/// About page handler: community story, mission, join CTA.
async fn about_page(
    State(state): State<AppState>,
    Extension(ResolvedLanguage(language)): Extension<ResolvedLanguage>,
) -> AppResult<Html<String>> {
    let mut context = tera::Context::new();
    inject_site_context(&state, language, "/about", &mut context);
    state.seo().inject(&mut context, "/about", language, Vec::new());

    context.insert("positions_href", &language.href("/positions"));

    let content = state.theme().tera().render("about.html", &context)?;

    let title = state.seo().page_meta("/about").title;
    let html = state
        .theme()
        .render_page("/about", &title, &content, &mut context)?;

    Ok(Html(html))
}
