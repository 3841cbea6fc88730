//! Contact page route handler.

use axum::{Extension, Router, extract::State, response::Html, routing::get};

use crate::error::AppResult;
use crate::middleware::ResolvedLanguage;
use crate::state::AppState;

use super::helpers::inject_site_context;

/// Create the contact page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/contact", get(contact_page))
}

/// Contact page handler: email, address, social channels.
async fn contact_page(
    State(state): State<AppState>,
    Extension(ResolvedLanguage(language)): Extension<ResolvedLanguage>,
) -> AppResult<Html<String>> {
    let mut context = tera::Context::new();
    inject_site_context(&state, language, "/contact", &mut context);
    state.seo().inject(&mut context, "/contact", language, Vec::new());

    let email = state.locale().translate("footer.contact.email", language);
    context.insert("contact_email", &email);
    context.insert("contact_mailto", &format!("mailto:{email}"));

    let content = state.theme().tera().render("contact.html", &context)?;

    let title = state.seo().page_meta("/contact").title;
    let html = state
        .theme()
        .render_page("/contact", &title, &content, &mut context)?;

    Ok(Html(html))
}
