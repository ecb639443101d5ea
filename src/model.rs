//! Data model: activity records and the roster snapshot.
//!
//! The server serves the roster as one JSON object mapping activity name to
//! details. The snapshot keeps the server's key order — stable sorts use it
//! to break ties, so decode must not reorder entries.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Display label used when an activity carries no category.
pub const DEFAULT_CATEGORY_LABEL: &str = "General";

/// Wire shape of a single activity's details (value side of the roster map).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivityDetails {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    /// Legacy schedule field, only consulted as a sort fallback.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// One activity, keyed by its (unique) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub time: Option<String>,
    pub category: Option<String>,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    fn from_wire(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            time: details.time,
            category: details.category,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Remaining capacity. May be zero or negative when the server hands us
    /// more participants than `max_participants`; callers render it as-is.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    /// Category for display; absent categories show as "General".
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY_LABEL)
    }

    /// String used for time-ordering: `schedule`, else `time`, else empty.
    /// Plain lexicographic material — no calendar semantics.
    pub fn sort_schedule(&self) -> &str {
        self.schedule
            .as_deref()
            .or(self.time.as_deref())
            .unwrap_or("")
    }

    /// Case-insensitive substring match against name and description.
    /// `needle` must already be lowercased. An absent description never
    /// matches.
    pub fn matches_search(&self, needle: &str) -> bool {
        if self.name.to_lowercase().contains(needle) {
            return true;
        }
        self.description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// Full in-memory copy of the server roster at one point in time.
///
/// Replaced wholesale on every successful fetch, never patched. Entry order
/// is the server's object order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<Activity>,
}

impl Snapshot {
    pub fn new(entries: Vec<Activity>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|a| a.name == name)
    }

    /// All activity names in snapshot order (signup selector is unfiltered).
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|a| a.name.as_str()).collect()
    }

    /// Distinct non-empty category values in first-seen order. Derived fresh
    /// from the snapshot, so a category removed server-side disappears on
    /// the next refresh. Absent categories are not represented here.
    pub fn categories(&self) -> Vec<&str> {
        let mut cats: Vec<&str> = Vec::new();
        for activity in &self.entries {
            if let Some(cat) = activity.category.as_deref() {
                if !cat.is_empty() && !cats.contains(&cat) {
                    cats.push(cat);
                }
            }
        }
        cats
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Snapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Snapshot, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) =
                    map.next_entry::<String, ActivityDetails>()?
                {
                    entries.push(Activity::from_wire(name, details));
                }
                Ok(Snapshot { entries })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Snapshot {
        serde_json::from_str(json).expect("valid snapshot json")
    }

    #[test]
    fn decode_preserves_server_order() {
        let snapshot = decode(
            r#"{
                "Zeta Club": {"description": "z", "schedule": "Fri", "max_participants": 5, "participants": []},
                "Alpha Club": {"description": "a", "schedule": "Mon", "max_participants": 5, "participants": []}
            }"#,
        );
        let names: Vec<&str> = snapshot.names();
        assert_eq!(names, vec!["Zeta Club", "Alpha Club"]);
    }

    #[test]
    fn decode_tolerates_optional_fields() {
        let snapshot = decode(r#"{"Chess Club": {"max_participants": 10}}"#);
        let a = snapshot.get("Chess Club").unwrap();
        assert_eq!(a.description, None);
        assert_eq!(a.category, None);
        assert_eq!(a.category_label(), "General");
        assert!(a.participants.is_empty());
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let err = serde_json::from_str::<Snapshot>(r#"["not", "a", "map"]"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<Snapshot>(r#"{"Chess": {"max_participants": "ten"}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn spots_left_allows_overbooked_rosters() {
        let mut a = Activity {
            name: "Chess Club".into(),
            description: None,
            schedule: None,
            time: None,
            category: None,
            max_participants: 10,
            participants: vec!["a@x.com".into(), "b@x.com".into(), "c@x.com".into()],
        };
        assert_eq!(a.spots_left(), 7);

        a.participants = (0..10).map(|i| format!("p{i}@x.com")).collect();
        assert_eq!(a.spots_left(), 0);

        a.participants = (0..12).map(|i| format!("p{i}@x.com")).collect();
        assert_eq!(a.spots_left(), -2);
    }

    #[test]
    fn categories_are_deduplicated_in_first_seen_order() {
        let snapshot = decode(
            r#"{
                "A": {"category": "Games", "max_participants": 1},
                "B": {"category": "Arts", "max_participants": 1},
                "C": {"category": "Games", "max_participants": 1},
                "D": {"max_participants": 1}
            }"#,
        );
        assert_eq!(snapshot.categories(), vec!["Games", "Arts"]);
    }

    #[test]
    fn sort_schedule_prefers_schedule_over_time() {
        let snapshot = decode(
            r#"{
                "A": {"schedule": "Mon 3pm", "time": "Tue 4pm", "max_participants": 1},
                "B": {"time": "Wed 5pm", "max_participants": 1},
                "C": {"max_participants": 1}
            }"#,
        );
        assert_eq!(snapshot.get("A").unwrap().sort_schedule(), "Mon 3pm");
        assert_eq!(snapshot.get("B").unwrap().sort_schedule(), "Wed 5pm");
        assert_eq!(snapshot.get("C").unwrap().sort_schedule(), "");
    }

    #[test]
    fn search_never_matches_absent_description() {
        let snapshot = decode(r#"{"Chess Club": {"max_participants": 1}}"#);
        let a = snapshot.get("Chess Club").unwrap();
        assert!(a.matches_search("chess"));
        assert!(!a.matches_search("strategy"));
    }
}
