//! Application page route handler.
//!
//! The positions page forwards a listing id via `?position=<id>`; the id is
//! validated against the catalog and preselects the role in the form.

use axum::{
    Extension, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::locale::Language;
use crate::middleware::ResolvedLanguage;
use crate::state::AppState;

use super::helpers::inject_site_context;

/// Create the apply page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/apply", get(apply_page))
}

/// Apply query parameters.
#[derive(Debug, Deserialize)]
pub struct ApplyQuery {
    /// Preselected listing id from the positions page.
    pub position: Option<String>,
}

/// A role option in the application form.
#[derive(Debug, Serialize)]
struct RoleOption {
    id: &'static str,
    title: &'static str,
    selected: bool,
}

/// Apply page handler.
async fn apply_page(
    State(state): State<AppState>,
    Extension(ResolvedLanguage(language)): Extension<ResolvedLanguage>,
    Query(params): Query<ApplyQuery>,
) -> AppResult<Html<String>> {
    // An explicit but unknown position id is a dead link, not a soft default.
    let selected = match params.position.as_deref() {
        Some(id) => Some(state.catalog().get(id).ok_or(AppError::NotFound)?),
        None => None,
    };

    let roles: Vec<RoleOption> = state
        .catalog()
        .records()
        .iter()
        .map(|record| RoleOption {
            id: record.id,
            title: match language {
                Language::En => record.title_en,
                Language::Zh => record.title_zh,
            },
            selected: selected.is_some_and(|s| s.id == record.id),
        })
        .collect();

    let mut context = tera::Context::new();
    inject_site_context(&state, language, "/apply", &mut context);
    state.seo().inject(&mut context, "/apply", language, Vec::new());

    context.insert("roles", &roles);
    context.insert("has_preselection", &selected.is_some());

    let content = state.theme().tera().render("apply.html", &context)?;

    let title = state.seo().page_meta("/apply").title;
    let html = state
        .theme()
        .render_page("/apply", &title, &content, &mut context)?;

    Ok(Html(html))
}
