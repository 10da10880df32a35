//! Filtering dimensions and the per-dimension selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::query::RawSelection;

/// Reserved key standing for "issue has no assignee".
pub const NO_ASSIGNEE: &str = "__NO_ASSIGNEE__";

/// Reserved key standing for "issue has no components".
pub const NO_COMPONENT: &str = "__NO_COMPONENT__";

/// Display label of a selected sentinel key.
pub const NONE_LABEL: &str = "None";

/// One independent axis of filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Project,
    Priority,
    IssueType,
    Assignee,
    Component,
}

impl Dimension {
    /// Order in which [`FilterSet::excludes`](super::FilterSet::excludes) consults dimensions.
    pub const EVALUATION_ORDER: [Dimension; 5] = [
        Self::Project,
        Self::Assignee,
        Self::Priority,
        Self::IssueType,
        Self::Component,
    ];

    /// Order in which dimensions appear in a serialized query string.
    pub const SERIALIZATION_ORDER: [Dimension; 5] = [
        Self::Project,
        Self::Priority,
        Self::IssueType,
        Self::Assignee,
        Self::Component,
    ];

    /// The query parameter name. These literals are part of shared board links.
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Priority => "priority",
            Self::IssueType => "issue-type",
            Self::Assignee => "assignee",
            Self::Component => "component",
        }
    }

    /// The reserved "no value" key, for dimensions an issue may leave empty.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Self::Assignee => Some(NO_ASSIGNEE),
            Self::Component => Some(NO_COMPONENT),
            _ => None,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Project => 0,
            Self::Priority => 1,
            Self::IssueType => 2,
            Self::Assignee => 3,
            Self::Component => 4,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_name())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(Self::Project),
            "priority" => Ok(Self::Priority),
            "issue-type" => Ok(Self::IssueType),
            "assignee" => Ok(Self::Assignee),
            "component" => Ok(Self::Component),
            _ => Err(format!("Invalid dimension: {}", s)),
        }
    }
}

/// An entry of a dimension's catalog of valid keys.
pub trait CatalogEntry {
    /// Canonical key matched against selections and issue values.
    fn key(&self) -> &str;

    /// Human readable name shown in filter summaries.
    fn label(&self) -> &str {
        self.key()
    }
}

impl CatalogEntry for str {
    fn key(&self) -> &str {
        self
    }
}

impl CatalogEntry for String {
    fn key(&self) -> &str {
        self
    }
}

impl<T: CatalogEntry + ?Sized> CatalogEntry for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectedKey {
    key: String,
    label: String,
}

/// The selected keys of one dimension, in catalog order.
///
/// A filter is enabled exactly when it has at least one selected key. There
/// is no way to build one other than [`DimensionFilter::rebuild`], so the
/// selection can never contain a key the catalog did not offer (sentinels
/// aside).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionFilter {
    selected: Vec<SelectedKey>,
}

impl DimensionFilter {
    /// Rebuild a dimension from raw form state and the catalog of valid keys.
    ///
    /// The sentinel of `dimension` (if any) is checked first and does not
    /// need to appear in `catalog`. An empty catalog leaves the filter
    /// disabled unless the sentinel is selected.
    pub fn rebuild<I>(dimension: Dimension, raw: &RawSelection, catalog: I) -> Self
    where
        I: IntoIterator,
        I::Item: CatalogEntry,
    {
        let mut filter = Self::default();
        if let Some(sentinel) = dimension.sentinel().filter(|s| raw.is_selected(s)) {
            filter.push(sentinel, NONE_LABEL);
        }
        for entry in catalog {
            if raw.is_selected(entry.key()) {
                filter.push(entry.key(), entry.label());
            }
        }
        filter
    }

    fn push(&mut self, key: &str, label: &str) {
        if !self.contains(key) {
            self.selected.push(SelectedKey {
                key: key.to_string(),
                label: label.to_string(),
            });
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.selected.iter().any(|s| s.key == key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected keys in selection order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(|s| s.key.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(|s| s.label.as_str())
    }

    /// Whether an enabled filter rejects a single-valued issue field.
    pub(crate) fn rejects(&self, value: &str) -> bool {
        self.is_enabled() && !self.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named {
        key: &'static str,
        name: &'static str,
    }

    impl CatalogEntry for Named {
        fn key(&self) -> &str {
            self.key
        }

        fn label(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn test_dimension_roundtrip() {
        for s in &["project", "priority", "issue-type", "assignee", "component"] {
            let parsed: Dimension = s.parse().unwrap();
            assert_eq!(parsed.param_name(), *s);
            assert_eq!(parsed.to_string(), *s);
        }
        assert!("issue_type".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_serde_uses_param_names() {
        assert_eq!(
            serde_json::to_string(&Dimension::IssueType).unwrap(),
            "\"issue-type\""
        );
    }

    #[test]
    fn test_only_assignee_and_component_have_sentinels() {
        assert_eq!(Dimension::Assignee.sentinel(), Some(NO_ASSIGNEE));
        assert_eq!(Dimension::Component.sentinel(), Some(NO_COMPONENT));
        assert_eq!(Dimension::Project.sentinel(), None);
        assert_eq!(Dimension::Priority.sentinel(), None);
        assert_eq!(Dimension::IssueType.sentinel(), None);
    }

    #[test]
    fn test_rebuild_keeps_catalog_order() {
        let raw = RawSelection::from_keys(["Low", "High"]);
        let filter =
            DimensionFilter::rebuild(Dimension::Priority, &raw, ["Highest", "High", "Low"]);
        assert_eq!(filter.keys().collect::<Vec<_>>(), vec!["High", "Low"]);
        assert!(filter.is_enabled());
    }

    #[test]
    fn test_rebuild_ignores_keys_outside_catalog() {
        let raw = RawSelection::from_keys(["X"]);
        let filter = DimensionFilter::rebuild(Dimension::Project, &raw, ["A", "B"]);
        assert!(!filter.is_enabled());
        assert!(filter.is_empty());
    }

    #[test]
    fn test_rebuild_false_entries_are_not_selected() {
        let raw: RawSelection = [("A", false), ("B", true)].into_iter().collect();
        let filter = DimensionFilter::rebuild(Dimension::Project, &raw, ["A", "B"]);
        assert_eq!(filter.keys().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_rebuild_empty_catalog_disables() {
        let raw = RawSelection::from_keys(["A"]);
        let filter = DimensionFilter::rebuild(Dimension::Project, &raw, Vec::<String>::new());
        assert!(!filter.is_enabled());
    }

    #[test]
    fn test_sentinel_selected_first_without_catalog_entry() {
        let raw = RawSelection::from_keys(["kabir", NO_ASSIGNEE]);
        let catalog = [
            Named {
                key: "kabir",
                name: "Kabir Khan",
            },
            Named {
                key: "stuart",
                name: "Stuart Douglas",
            },
        ];
        let filter = DimensionFilter::rebuild(Dimension::Assignee, &raw, &catalog);
        assert_eq!(filter.keys().collect::<Vec<_>>(), vec![NO_ASSIGNEE, "kabir"]);
        assert_eq!(filter.labels().collect::<Vec<_>>(), vec![NONE_LABEL, "Kabir Khan"]);
    }

    #[test]
    fn test_sentinel_alone_enables() {
        let raw = RawSelection::from_keys([NO_COMPONENT]);
        let filter = DimensionFilter::rebuild(Dimension::Component, &raw, Vec::<String>::new());
        assert!(filter.is_enabled());
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_sentinel_ignored_for_dimensions_without_one() {
        let raw = RawSelection::from_keys([NO_COMPONENT]);
        let filter = DimensionFilter::rebuild(Dimension::Project, &raw, ["A"]);
        assert!(!filter.is_enabled());
    }

    #[test]
    fn test_duplicate_catalog_entries_selected_once() {
        let raw = RawSelection::from_keys(["A"]);
        let filter = DimensionFilter::rebuild(Dimension::Project, &raw, ["A", "A"]);
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_rejects_only_when_enabled() {
        let disabled = DimensionFilter::default();
        assert!(!disabled.rejects("anything"));

        let raw = RawSelection::from_keys(["A"]);
        let filter = DimensionFilter::rebuild(Dimension::Project, &raw, ["A", "B"]);
        assert!(!filter.rejects("A"));
        assert!(filter.rejects("B"));
    }
}
