//! Board snapshot models.
//!
//! A snapshot is what the board view polls from the issue tracker: the
//! catalogs of valid keys for each filter dimension plus the issues on the
//! board. Catalog lists missing from the JSON are treated as empty.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::BoardError;
use crate::filter::{
    CatalogEntry, Dimension, FilterSet, IssueFields, NO_ASSIGNEE, NO_COMPONENT, QuerySelections,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardProject {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Priority {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueType {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignee {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Component {
    pub name: String,
}

impl CatalogEntry for BoardProject {
    fn key(&self) -> &str {
        &self.code
    }
}

impl CatalogEntry for Priority {
    fn key(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for IssueType {
    fn key(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for Assignee {
    fn key(&self) -> &str {
        &self.key
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for Component {
    fn key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardIssue {
    pub key: String,
    pub project_code: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub assignee: Option<String>,
    pub priority: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub linked_issues: Vec<String>,
}

impl IssueFields for BoardIssue {
    fn project_code(&self) -> &str {
        &self.project_code
    }

    fn assignee_key(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    fn priority(&self) -> &str {
        &self.priority
    }

    fn issue_type(&self) -> &str {
        &self.issue_type
    }

    fn components(&self) -> &[String] {
        &self.components
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub code: String,
    #[serde(default)]
    pub projects: Vec<BoardProject>,
    #[serde(default)]
    pub priorities: Vec<Priority>,
    #[serde(default)]
    pub issue_types: Vec<IssueType>,
    #[serde(default)]
    pub assignees: Vec<Assignee>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub issues: Vec<BoardIssue>,
}

impl BoardSnapshot {
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let content = std::fs::read_to_string(path).map_err(|source| BoardError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&content).map_err(|source| BoardError::SnapshotParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            board = %snapshot.code,
            issues = snapshot.issues.len(),
            "loaded board snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build filters from URL selections, validated against this board's catalogs.
    pub fn filters_from_query(&self, selections: &QuerySelections) -> FilterSet {
        let mut filters = FilterSet::new();
        for dimension in Dimension::SERIALIZATION_ORDER {
            self.apply_selection(&mut filters, dimension, selections);
        }
        filters
    }

    fn apply_selection(
        &self,
        filters: &mut FilterSet,
        dimension: Dimension,
        selections: &QuerySelections,
    ) {
        let raw = selections.get(dimension);
        match dimension {
            Dimension::Project => filters.set_dimension(dimension, raw, &self.projects),
            Dimension::Priority => filters.set_dimension(dimension, raw, &self.priorities),
            Dimension::IssueType => filters.set_dimension(dimension, raw, &self.issue_types),
            Dimension::Assignee => filters.set_dimension(dimension, raw, &self.assignees),
            Dimension::Component => filters.set_dimension(dimension, raw, &self.components),
        }
    }

    /// Issues not hidden by `filters`, in board order.
    pub fn visible_issues<'a>(&'a self, filters: &FilterSet) -> Vec<&'a BoardIssue> {
        self.issues
            .iter()
            .filter(|issue| !filters.excludes(*issue))
            .collect()
    }

    /// `(key, label)` pairs a filter form offers for a dimension; the
    /// sentinel comes first where the dimension has one.
    pub fn catalog_entries(&self, dimension: Dimension) -> Vec<(&str, &str)> {
        fn pairs<T: CatalogEntry>(entries: &[T]) -> Vec<(&str, &str)> {
            entries.iter().map(|e| (e.key(), e.label())).collect()
        }

        let mut entries = match dimension {
            Dimension::Assignee => vec![(NO_ASSIGNEE, crate::filter::NONE_LABEL)],
            Dimension::Component => vec![(NO_COMPONENT, crate::filter::NONE_LABEL)],
            _ => Vec::new(),
        };
        entries.extend(match dimension {
            Dimension::Project => pairs(&self.projects),
            Dimension::Priority => pairs(&self.priorities),
            Dimension::IssueType => pairs(&self.issue_types),
            Dimension::Assignee => pairs(&self.assignees),
            Dimension::Component => pairs(&self.components),
        });
        entries
    }
}
