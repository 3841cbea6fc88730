//! Positions page: the recruitment listing with search and category filters.
//!
//! Query parameters `filter` and `q` feed the catalog filter engine; the
//! handler recomputes the visible set on every request and renders either the
//! card grid or the explicit no-results state.

use axum::{
    Extension, Json, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::{Deserialize, Serialize};

use dnt_catalog::{Category, CategoryFilter, FilterState, ListingRecord, compute_visible};

use crate::error::AppResult;
use crate::locale::Language;
use crate::middleware::ResolvedLanguage;
use crate::state::AppState;

use super::helpers::inject_site_context;

/// Create the positions router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/positions", get(positions_page))
        .route("/api/positions", get(positions_json))
}

/// Positions query parameters.
#[derive(Debug, Deserialize)]
pub struct PositionsQuery {
    /// Search term.
    pub q: Option<String>,
    /// Category filter keyword (all | priority | creative | support).
    pub filter: Option<String>,
}

impl PositionsQuery {
    /// Build the engine state from query parameters.
    ///
    /// Unknown filter keywords fall back to `all` rather than erroring: the
    /// chips are the only intended source of this value.
    fn filter_state(&self) -> FilterState {
        let category = self
            .filter
            .as_deref()
            .and_then(CategoryFilter::parse)
            .unwrap_or_default();
        FilterState::new(category, self.q.clone().unwrap_or_default())
    }
}

/// Card presentation attributes, keyed off the record rather than stored in
/// the data model.
struct CardStyle {
    icon: &'static str,
    accent: &'static str,
}

/// Presentation lookup: per-record style with a category fallback for any
/// future record without a bespoke entry.
fn card_style(record: &ListingRecord) -> CardStyle {
    let (icon, accent) = match record.id {
        "community-organizer" => ("users", "red"),
        "marketing-sales" => ("speakerphone", "blue"),
        "bilingual-host" => ("microphone", "purple"),
        "reception-lead" => ("user-group", "green"),
        "photographer" => ("camera", "indigo"),
        "video-producer" => ("video-camera", "pink"),
        "fb-manager" => ("cake", "orange"),
        "event-assistant" => ("support", "teal"),
        _ => match record.category {
            Category::PriorityTrack => ("star", "red"),
            Category::Creative => ("camera", "indigo"),
            Category::Support => ("support", "teal"),
        },
    };
    CardStyle { icon, accent }
}

/// A listing card resolved for one language.
#[derive(Debug, Serialize)]
struct PositionCard {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    category: &'static str,
    is_priority: bool,
    responsibilities: Vec<String>,
    compensation: String,
    icon: &'static str,
    accent: &'static str,
    apply_href: String,
}

impl PositionCard {
    fn build(record: &ListingRecord, state: &AppState, language: Language) -> Self {
        // The active language's title leads; the other becomes the subtitle.
        let (title, subtitle) = match language {
            Language::En => (record.title_en, record.title_zh),
            Language::Zh => (record.title_zh, record.title_en),
        };
        let style = card_style(record);

        Self {
            id: record.id,
            title,
            subtitle,
            category: record.category.as_str(),
            is_priority: record.is_priority,
            responsibilities: state
                .locale()
                .translate_list(record.responsibilities_key, language),
            compensation: state.locale().translate(record.compensation_key, language),
            icon: style.icon,
            accent: style.accent,
            apply_href: language.href(&format!(
                "/apply?position={}",
                urlencoding::encode(record.id)
            )),
        }
    }
}

/// A filter chip with its link, preserving the current search term.
#[derive(Debug, Serialize)]
struct FilterChip {
    id: &'static str,
    label: String,
    href: String,
    active: bool,
}

fn filter_chips(
    state: &AppState,
    language: Language,
    active: CategoryFilter,
    search_term: &str,
) -> Vec<FilterChip> {
    [
        (CategoryFilter::All, "positions.filters.all"),
        (CategoryFilter::Priority, "positions.filters.priority"),
        (CategoryFilter::Creative, "positions.filters.creative"),
        (CategoryFilter::Support, "positions.filters.support"),
    ]
    .into_iter()
    .map(|(filter, label_key)| {
        let mut href = format!("/positions?filter={}", filter.as_str());
        if !search_term.is_empty() {
            href.push_str(&format!("&q={}", urlencoding::encode(search_term)));
        }
        FilterChip {
            id: filter.as_str(),
            label: state.locale().translate(label_key, language),
            href: language.href(&href),
            active: filter == active,
        }
    })
    .collect()
}

/// HTML positions page.
async fn positions_page(
    State(state): State<AppState>,
    Extension(ResolvedLanguage(language)): Extension<ResolvedLanguage>,
    Query(params): Query<PositionsQuery>,
) -> AppResult<Html<String>> {
    let filter_state = params.filter_state();
    let visible = compute_visible(state.catalog().records(), &filter_state);

    let cards: Vec<PositionCard> = visible
        .iter()
        .map(|record| PositionCard::build(record, &state, language))
        .collect();

    // One JobPosting block per visible listing.
    let jsonld: Vec<serde_json::Value> = visible
        .iter()
        .map(|record| {
            let description = state.locale().translate(record.compensation_key, language);
            state
                .seo()
                .job_posting_jsonld(record.id, record.title_en, &description)
        })
        .collect();

    let mut context = tera::Context::new();
    inject_site_context(&state, language, "/positions", &mut context);
    state.seo().inject(&mut context, "/positions", language, jsonld);

    context.insert("no_results", &cards.is_empty());
    context.insert("cards", &cards);
    context.insert(
        "chips",
        &filter_chips(
            &state,
            language,
            filter_state.category,
            &filter_state.search_term,
        ),
    );
    context.insert("query", &filter_state.search_term);
    context.insert("active_filter", filter_state.category.as_str());
    context.insert("search_action", &language.href("/positions"));
    context.insert("contact_href", &language.href("/contact"));

    let content = state.theme().tera().render("positions.html", &context)?;

    let title = state.seo().page_meta("/positions").title;
    let html = state
        .theme()
        .render_page("/positions", &title, &content, &mut context)?;

    Ok(Html(html))
}

/// JSON positions response.
#[derive(Debug, Serialize)]
pub struct PositionsJsonResponse {
    pub filter: &'static str,
    pub query: String,
    pub total: usize,
    pub results: Vec<PositionJson>,
}

/// Single listing in JSON format.
#[derive(Debug, Serialize)]
pub struct PositionJson {
    pub id: &'static str,
    pub title_en: &'static str,
    pub title_zh: &'static str,
    pub category: &'static str,
    pub is_priority: bool,
    pub url: String,
}

/// JSON positions endpoint, same computation as the HTML page.
async fn positions_json(
    State(state): State<AppState>,
    Query(params): Query<PositionsQuery>,
) -> Json<PositionsJsonResponse> {
    let filter_state = params.filter_state();
    let visible = compute_visible(state.catalog().records(), &filter_state);

    let results = visible
        .iter()
        .map(|record| PositionJson {
            id: record.id,
            title_en: record.title_en,
            title_zh: record.title_zh,
            category: record.category.as_str(),
            is_priority: record.is_priority,
            url: format!("/apply?position={}", urlencoding::encode(record.id)),
        })
        .collect::<Vec<_>>();

    Json(PositionsJsonResponse {
        filter: filter_state.category.as_str(),
        query: filter_state.search_term,
        total: results.len(),
        results,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn unknown_filter_keyword_falls_back_to_all() {
        let params = PositionsQuery {
            q: None,
            filter: Some("bogus".to_string()),
        };
        assert_eq!(params.filter_state().category, CategoryFilter::All);
    }

    #[test]
    fn filter_state_carries_the_raw_search_term() {
        let params = PositionsQuery {
            q: Some("  Host ".to_string()),
            filter: Some("priority".to_string()),
        };
        let state = params.filter_state();
        assert_eq!(state.category, CategoryFilter::Priority);
        // The term is passed through untrimmed; matching semantics live in
        // the engine.
        assert_eq!(state.search_term, "  Host ");
    }

    #[test]
    fn card_style_category_fallback() {
        let record = ListingRecord {
            id: "future-role",
            title_en: "Future Role",
            title_zh: "未來職位",
            category: Category::Creative,
            is_priority: false,
            responsibilities_key: "x",
            compensation_key: "x",
        };
        let style = card_style(&record);
        assert_eq!(style.icon, "camera");
        assert_eq!(style.accent, "indigo");
    }
}
