//! Listing records and the immutable catalog.

use serde::Serialize;

/// Classification tag for a listing.
///
/// This is orthogonal to [`ListingRecord::is_priority`]: a `Support` record
/// can still carry the priority flag. The variant is named `PriorityTrack`
/// (serialized `priority-track`) so the category value never collides with
/// the flag-based `priority` filter keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    PriorityTrack,
    Creative,
    Support,
}

impl Category {
    /// Stable string form, matching the serialized representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::PriorityTrack => "priority-track",
            Category::Creative => "creative",
            Category::Support => "support",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recruitment listing.
///
/// Records are authored once and never mutated. The `responsibilities_key`
/// and `compensation_key` fields are opaque translation keys resolved by the
/// locale collaborator at render time.
#[derive(Debug, Clone, Serialize)]
pub struct ListingRecord {
    /// Stable unique slug, also used by the apply flow.
    pub id: &'static str,
    /// English display title.
    pub title_en: &'static str,
    /// Traditional Chinese display title.
    pub title_zh: &'static str,
    /// Classification tag.
    pub category: Category,
    /// Priority flag, independent of `category`.
    pub is_priority: bool,
    /// Translation key for the responsibilities bullet list.
    pub responsibilities_key: &'static str,
    /// Translation key for the compensation line.
    pub compensation_key: &'static str,
}

/// The full ordered set of listing records.
///
/// Constructed once at startup; order is authoring order and is preserved by
/// every filter operation.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ListingRecord>,
}

impl Catalog {
    /// The built-in recruitment catalog.
    pub fn builtin() -> Self {
        Self {
            records: vec![
                ListingRecord {
                    id: "community-organizer",
                    title_en: "Community Event Organizer",
                    title_zh: "社群活動總召",
                    category: Category::PriorityTrack,
                    is_priority: true,
                    responsibilities_key: "positions.communityOrganizer.responsibilities",
                    compensation_key: "positions.communityOrganizer.compensation",
                },
                ListingRecord {
                    id: "marketing-sales",
                    title_en: "Marketing & Sales",
                    title_zh: "行銷企劃",
                    category: Category::PriorityTrack,
                    is_priority: true,
                    responsibilities_key: "positions.marketingSales.responsibilities",
                    compensation_key: "positions.marketingSales.compensation",
                },
                ListingRecord {
                    id: "bilingual-host",
                    title_en: "Bilingual Host",
                    title_zh: "雙語主持人",
                    category: Category::PriorityTrack,
                    is_priority: true,
                    responsibilities_key: "positions.bilingualHost.responsibilities",
                    compensation_key: "positions.bilingualHost.compensation",
                },
                ListingRecord {
                    id: "reception-lead",
                    title_en: "Reception Lead",
                    title_zh: "接待",
                    category: Category::Support,
                    is_priority: false,
                    responsibilities_key: "positions.receptionLead.responsibilities",
                    compensation_key: "positions.receptionLead.compensation",
                },
                ListingRecord {
                    id: "photographer",
                    title_en: "Photographer",
                    title_zh: "攝影師",
                    category: Category::Creative,
                    is_priority: false,
                    responsibilities_key: "positions.photographer.responsibilities",
                    compensation_key: "positions.photographer.compensation",
                },
                ListingRecord {
                    id: "video-producer",
                    title_en: "Short Video Producer",
                    title_zh: "短影片製作",
                    category: Category::Creative,
                    is_priority: false,
                    responsibilities_key: "positions.videoProducer.responsibilities",
                    compensation_key: "positions.videoProducer.compensation",
                },
                ListingRecord {
                    id: "fb-manager",
                    title_en: "F&B Manager",
                    title_zh: "餐飲管理",
                    category: Category::Support,
                    is_priority: false,
                    responsibilities_key: "positions.fbManager.responsibilities",
                    compensation_key: "positions.fbManager.compensation",
                },
                ListingRecord {
                    id: "event-assistant",
                    title_en: "Event Assistant",
                    title_zh: "活動助理",
                    category: Category::Support,
                    is_priority: false,
                    responsibilities_key: "positions.eventAssistant.responsibilities",
                    compensation_key: "positions.eventAssistant.compensation",
                },
            ],
        }
    }

    /// All records in authoring order.
    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    /// Look up a record by its slug.
    pub fn get(&self, id: &str) -> Option<&ListingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_has_eight_records() {
        assert_eq!(Catalog::builtin().len(), 8);
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn get_by_id() {
        let catalog = Catalog::builtin();
        let record = catalog.get("bilingual-host").unwrap();
        assert_eq!(record.title_en, "Bilingual Host");
        assert!(record.is_priority);
        assert!(catalog.get("no-such-role").is_none());
    }

    #[test]
    fn priority_flag_is_independent_of_category() {
        // Every built-in priority-track record is flagged, but the flag is a
        // separate field so the two can diverge for future records.
        let catalog = Catalog::builtin();
        for record in catalog.records() {
            if record.category == Category::PriorityTrack {
                assert!(record.is_priority, "{} should be flagged", record.id);
            }
        }
    }

    #[test]
    fn category_serializes_kebab_case() {
        assert_eq!(Category::PriorityTrack.as_str(), "priority-track");
        assert_eq!(Category::Creative.to_string(), "creative");
    }
}
