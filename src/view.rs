//! Pure derivation from snapshot + filter state to the displayed list.
//!
//! `derive` never mutates the snapshot and is deterministic: same inputs,
//! same output. Step order is fixed — category filter, then search, then
//! sort — and the sort is stable, so equal keys keep snapshot order.

use crate::model::{Activity, Snapshot};

/// Sort key selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Activity name, case-insensitive, ascending.
    #[default]
    Name,
    /// Schedule string (with `time` fallback), lexicographic, ascending.
    Time,
}

impl SortKey {
    pub fn toggle(self) -> SortKey {
        match self {
            SortKey::Name => SortKey::Time,
            SortKey::Time => SortKey::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Time => "time",
        }
    }
}

/// Filter controls as set in the UI. Lives only for the session; defaults
/// are no category filter, empty search, sort by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Exact, case-sensitive category to keep. `None` keeps everything.
    pub category: Option<String>,
    /// Raw search text; trimmed and lowercased before matching.
    pub search: String,
    pub sort: SortKey,
}

/// Computes the ordered list of activities to display.
///
/// An empty result is first-class: it means "nothing matched", which is
/// distinct from "no snapshot loaded yet" (handled before calling this).
pub fn derive<'a>(snapshot: &'a Snapshot, filter: &FilterState) -> Vec<&'a Activity> {
    let mut rows: Vec<&Activity> = snapshot.iter().collect();

    if let Some(cat) = filter.category.as_deref() {
        // Exact string match; activities without a category never match.
        rows.retain(|a| a.category.as_deref() == Some(cat));
    }

    let needle = filter.search.trim().to_lowercase();
    if !needle.is_empty() {
        rows.retain(|a| a.matches_search(&needle));
    }

    match filter.sort {
        SortKey::Name => {
            rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::Time => {
            rows.sort_by(|a, b| a.sort_schedule().cmp(b.sort_schedule()));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Snapshot {
        serde_json::from_str(
            r#"{
                "Drama Club": {"description": "Acting and improv", "schedule": "Wed 4-6pm", "category": "Arts", "max_participants": 20, "participants": ["d@x.com"]},
                "Chess Club": {"description": "Learn chess", "schedule": "Mon 3-4pm", "category": "Games", "max_participants": 10, "participants": []},
                "Board Games": {"description": "Casual play", "schedule": "Mon 3-4pm", "category": "Games", "max_participants": 12, "participants": []},
                "Astronomy": {"schedule": "Tue 8-9pm", "max_participants": 8, "participants": []}
            }"#,
        )
        .expect("valid roster json")
    }

    fn names(rows: &[&crate::model::Activity]) -> Vec<String> {
        rows.iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn default_filter_sorts_by_name() {
        let snapshot = roster();
        let rows = derive(&snapshot, &FilterState::default());
        assert_eq!(
            names(&rows),
            vec!["Astronomy", "Board Games", "Chess Club", "Drama Club"]
        );
    }

    #[test]
    fn category_filter_is_exact_and_case_sensitive() {
        let snapshot = roster();
        let filter = FilterState {
            category: Some("Games".into()),
            ..FilterState::default()
        };
        assert_eq!(names(&derive(&snapshot, &filter)), vec!["Board Games", "Chess Club"]);

        let filter = FilterState {
            category: Some("games".into()),
            ..FilterState::default()
        };
        assert!(derive(&snapshot, &filter).is_empty());
    }

    #[test]
    fn uncategorized_activities_never_match_a_category_filter() {
        let snapshot = roster();
        let filter = FilterState {
            category: Some("General".into()),
            ..FilterState::default()
        };
        // "General" is only a display label, not an indexed category.
        assert!(derive(&snapshot, &filter).is_empty());
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let snapshot = roster();
        let filter = FilterState {
            search: "  CHESS ".into(),
            ..FilterState::default()
        };
        assert_eq!(names(&derive(&snapshot, &filter)), vec!["Chess Club"]);

        let filter = FilterState {
            search: "improv".into(),
            ..FilterState::default()
        };
        assert_eq!(names(&derive(&snapshot, &filter)), vec!["Drama Club"]);
    }

    #[test]
    fn search_with_no_matches_yields_empty_list() {
        let snapshot = roster();
        let filter = FilterState {
            search: "soccer".into(),
            ..FilterState::default()
        };
        assert!(derive(&snapshot, &filter).is_empty());
    }

    #[test]
    fn time_sort_is_stable_on_equal_schedules() {
        let snapshot = roster();
        let filter = FilterState {
            sort: SortKey::Time,
            ..FilterState::default()
        };
        // Drama and Chess/Board share nothing; Chess Club and Board Games
        // share "Mon 3-4pm" and must keep snapshot order (Chess before Board).
        assert_eq!(
            names(&derive(&snapshot, &filter)),
            vec!["Chess Club", "Board Games", "Astronomy", "Drama Club"]
        );
    }

    #[test]
    fn derive_is_idempotent_and_invents_nothing() {
        let snapshot = roster();
        let filter = FilterState::default();
        let first = names(&derive(&snapshot, &filter));
        let second = names(&derive(&snapshot, &filter));
        assert_eq!(first, second);
        assert_eq!(first.len(), snapshot.len());
        for name in &first {
            assert!(snapshot.get(name).is_some());
        }
    }

    #[test]
    fn chess_club_end_to_end_example() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"Chess Club": {"description": "Learn chess", "schedule": "Mon 3-4pm", "category": "Games", "max_participants": 10, "participants": []}}"#,
        )
        .unwrap();

        let mut filter = FilterState {
            search: "chess".into(),
            ..FilterState::default()
        };
        assert_eq!(names(&derive(&snapshot, &filter)), vec!["Chess Club"]);

        filter.search = "soccer".into();
        assert!(derive(&snapshot, &filter).is_empty());
    }

    #[test]
    fn category_filter_and_search_compose() {
        let snapshot = roster();
        let filter = FilterState {
            category: Some("Games".into()),
            search: "board".into(),
            ..FilterState::default()
        };
        assert_eq!(names(&derive(&snapshot, &filter)), vec!["Board Games"]);
    }
}
