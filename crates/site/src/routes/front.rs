//! Front page route handler.

use axum::{Extension, Router, extract::State, response::Html, routing::get};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::ResolvedLanguage;
use crate::state::AppState;

use super::helpers::inject_site_context;

/// Create the front page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(front_page))
}

/// A feature highlight on the home page.
#[derive(Debug, Serialize)]
struct Feature {
    icon: &'static str,
    title_key: &'static str,
    description_key: &'static str,
}

/// A community stat counter.
#[derive(Debug, Serialize)]
struct Stat {
    id: &'static str,
    value: u32,
    suffix: &'static str,
    icon: &'static str,
    title_key: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "lightning-bolt",
        title_key: "features.techHub.title",
        description_key: "features.techHub.description",
    },
    Feature {
        icon: "sparkles",
        title_key: "features.culture.title",
        description_key: "features.culture.description",
    },
    Feature {
        icon: "globe-alt",
        title_key: "features.location.title",
        description_key: "features.location.description",
    },
];

const STATS: [Stat; 4] = [
    Stat {
        id: "participants",
        value: 900,
        suffix: "+",
        icon: "users",
        title_key: "stats.participants",
    },
    Stat {
        id: "nationalities",
        value: 60,
        suffix: "+",
        icon: "globe-alt",
        title_key: "stats.nationalities",
    },
    Stat {
        id: "international",
        value: 46,
        suffix: "%",
        icon: "user-group",
        title_key: "stats.international",
    },
    Stat {
        id: "events",
        value: 25,
        suffix: "+",
        icon: "calendar",
        title_key: "stats.events",
    },
];

/// Front page handler: hero, feature trio, community stats, CTA.
async fn front_page(
    State(state): State<AppState>,
    Extension(ResolvedLanguage(language)): Extension<ResolvedLanguage>,
) -> AppResult<Html<String>> {
    let mut context = tera::Context::new();
    inject_site_context(&state, language, "/", &mut context);
    state.seo().inject(&mut context, "/", language, Vec::new());

    context.insert("features", &FEATURES);
    context.insert("stats", &STATS);
    context.insert("positions_href", &language.href("/positions"));
    context.insert("about_href", &language.href("/about"));

    let content = state.theme().tera().render("front.html", &context)?;

    let title = state.seo().page_meta("/").title;
    let html = state
        .theme()
        .render_page("/", &title, &content, &mut context)?;

    Ok(Html(html))
}
