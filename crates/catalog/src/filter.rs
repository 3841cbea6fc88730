//! The listing filter engine.
//!
//! A pure, order-preserving transform from the full catalog and the current
//! [`FilterState`] to the visible subset. Recomputation happens on every
//! state change; over a catalog of eight records the linear scan is free.

use serde::Serialize;

use crate::record::{Category, ListingRecord};

/// The user's category selection.
///
/// `Priority` selects on the [`ListingRecord::is_priority`] flag, NOT on the
/// category field. The other variants match the category field directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Priority,
    Creative,
    Support,
}

impl CategoryFilter {
    /// Parse a filter keyword as emitted by the filter chips.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(CategoryFilter::All),
            "priority" => Some(CategoryFilter::Priority),
            "creative" => Some(CategoryFilter::Creative),
            "support" => Some(CategoryFilter::Support),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Priority => "priority",
            CategoryFilter::Creative => "creative",
            CategoryFilter::Support => "support",
        }
    }
}

/// Transient UI state driving visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search_term: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, search_term: impl Into<String>) -> Self {
        Self {
            category,
            search_term: search_term.into(),
        }
    }
}

/// Derive the visible subsequence of `records` for the given state.
///
/// Category narrowing runs first, then text narrowing when the search term is
/// non-empty. English titles match case-insensitively; Chinese titles match
/// as literal substrings with no case folding. Output order is catalog order.
/// An empty result is a normal outcome, not an error.
pub fn compute_visible<'a>(
    records: &'a [ListingRecord],
    state: &FilterState,
) -> Vec<&'a ListingRecord> {
    records.iter().filter(|r| matches(r, state)).collect()
}

fn matches(record: &ListingRecord, state: &FilterState) -> bool {
    let category_ok = match state.category {
        CategoryFilter::All => true,
        CategoryFilter::Priority => record.is_priority,
        CategoryFilter::Creative => record.category == Category::Creative,
        CategoryFilter::Support => record.category == Category::Support,
    };
    if !category_ok {
        return false;
    }

    if state.search_term.is_empty() {
        return true;
    }

    record
        .title_en
        .to_lowercase()
        .contains(&state.search_term.to_lowercase())
        || record.title_zh.contains(&state.search_term)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::record::Catalog;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn default_state_returns_full_catalog_in_order() {
        let catalog = catalog();
        let visible = compute_visible(catalog.records(), &FilterState::default());
        assert_eq!(visible.len(), catalog.len());
        for (got, want) in visible.iter().zip(catalog.records()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn unmatched_term_yields_empty_result() {
        let catalog = catalog();
        let state = FilterState::new(CategoryFilter::All, "zzz no such role");
        assert!(compute_visible(catalog.records(), &state).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let catalog = catalog();
        let state = FilterState::new(CategoryFilter::Support, "e");
        let first: Vec<&str> = compute_visible(catalog.records(), &state)
            .iter()
            .map(|r| r.id)
            .collect();
        let second: Vec<&str> = compute_visible(catalog.records(), &state)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn result_is_a_subsequence_of_the_catalog() {
        let catalog = catalog();
        for filter in [
            CategoryFilter::All,
            CategoryFilter::Priority,
            CategoryFilter::Creative,
            CategoryFilter::Support,
        ] {
            let state = FilterState::new(filter, "");
            let visible = compute_visible(catalog.records(), &state);

            // Every visible record exists in the catalog, and relative order
            // matches catalog order.
            let positions: Vec<usize> = visible
                .iter()
                .map(|v| {
                    catalog
                        .records()
                        .iter()
                        .position(|r| r.id == v.id)
                        .unwrap()
                })
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn priority_filter_uses_the_flag_not_the_category_field() {
        let catalog = catalog();
        let state = FilterState::new(CategoryFilter::Priority, "");
        let visible = compute_visible(catalog.records(), &state);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|r| r.is_priority));
    }

    #[test]
    fn community_organizer_scenario() {
        let catalog = catalog();

        // Appears under the priority filter.
        let state = FilterState::new(CategoryFilter::Priority, "");
        let visible = compute_visible(catalog.records(), &state);
        assert!(visible.iter().any(|r| r.id == "community-organizer"));

        // Absent under the creative filter.
        let state = FilterState::new(CategoryFilter::Creative, "");
        let visible = compute_visible(catalog.records(), &state);
        assert!(visible.iter().all(|r| r.id != "community-organizer"));

        // English title matches regardless of case.
        for term in ["community", "COMMUNITY"] {
            let state = FilterState::new(CategoryFilter::All, term);
            let visible = compute_visible(catalog.records(), &state);
            assert!(
                visible.iter().any(|r| r.id == "community-organizer"),
                "term {term:?} should match"
            );
        }

        // Chinese title matches as a substring.
        let state = FilterState::new(CategoryFilter::All, "社群");
        let visible = compute_visible(catalog.records(), &state);
        assert!(visible.iter().any(|r| r.id == "community-organizer"));
    }

    #[test]
    fn chinese_title_matching_is_case_sensitive() {
        // A record whose Chinese title contains Latin letters only matches
        // with the exact casing; the case fold applies to the English title
        // alone. This asymmetry is intentional.
        let record = ListingRecord {
            id: "fb-manager-x",
            title_en: "Kitchen Coordinator",
            title_zh: "F&B 餐飲管理",
            category: Category::Support,
            is_priority: false,
            responsibilities_key: "x",
            compensation_key: "x",
        };
        let records = [record];

        let exact = FilterState::new(CategoryFilter::All, "F&B");
        assert_eq!(compute_visible(&records, &exact).len(), 1);

        let folded = FilterState::new(CategoryFilter::All, "f&b");
        assert!(compute_visible(&records, &folded).is_empty());
    }

    #[test]
    fn search_applies_after_category_narrowing() {
        let catalog = catalog();
        // "製作" only appears in a creative record; the support filter must
        // still exclude it.
        let state = FilterState::new(CategoryFilter::Support, "製作");
        assert!(compute_visible(catalog.records(), &state).is_empty());
    }

    #[test]
    fn parse_filter_keywords() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("priority"),
            Some(CategoryFilter::Priority)
        );
        assert_eq!(CategoryFilter::parse("Priority"), None);
        assert_eq!(CategoryFilter::parse(""), None);
    }
}
