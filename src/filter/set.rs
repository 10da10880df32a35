//! The aggregate board filter.

use tracing::{debug, trace};

use super::dimension::{CatalogEntry, Dimension, DimensionFilter, NO_ASSIGNEE, NO_COMPONENT};
use super::query::{RawSelection, encode_component};

/// The fields of an issue that filters look at.
pub trait IssueFields {
    fn project_code(&self) -> &str;

    /// Assignee key, or `None` when the issue is unassigned.
    fn assignee_key(&self) -> Option<&str>;

    fn priority(&self) -> &str;

    fn issue_type(&self) -> &str;

    /// Component names; empty when the issue has none.
    fn components(&self) -> &[String];
}

/// Filter selections for every dimension of a board view.
///
/// Each dimension is replaced wholesale by [`set_dimension`](Self::set_dimension);
/// nothing here fails, unknown or malformed input just has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    project: DimensionFilter,
    priority: DimensionFilter,
    issue_type: DimensionFilter,
    assignee: DimensionFilter,
    component: DimensionFilter,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one dimension with the catalog keys checked in `raw`.
    pub fn set_dimension<I>(&mut self, dimension: Dimension, raw: &RawSelection, catalog: I)
    where
        I: IntoIterator,
        I::Item: CatalogEntry,
    {
        let rebuilt = DimensionFilter::rebuild(dimension, raw, catalog);
        for key in raw.checked_keys().filter(|k| !rebuilt.contains(k)) {
            trace!(%dimension, key, "ignoring key outside the board catalog");
        }
        debug!(
            %dimension,
            selected = rebuilt.len(),
            enabled = rebuilt.is_enabled(),
            "rebuilt filter dimension"
        );
        *self.dimension_mut(dimension) = rebuilt;
    }

    pub fn dimension(&self, dimension: Dimension) -> &DimensionFilter {
        match dimension {
            Dimension::Project => &self.project,
            Dimension::Priority => &self.priority,
            Dimension::IssueType => &self.issue_type,
            Dimension::Assignee => &self.assignee,
            Dimension::Component => &self.component,
        }
    }

    fn dimension_mut(&mut self, dimension: Dimension) -> &mut DimensionFilter {
        match dimension {
            Dimension::Project => &mut self.project,
            Dimension::Priority => &mut self.priority,
            Dimension::IssueType => &mut self.issue_type,
            Dimension::Assignee => &mut self.assignee,
            Dimension::Component => &mut self.component,
        }
    }

    /// Whether any filter is active.
    pub fn is_active(&self) -> bool {
        Dimension::SERIALIZATION_ORDER
            .iter()
            .any(|d| self.dimension(*d).is_enabled())
    }

    /// Whether the issue should be hidden.
    ///
    /// Dimensions are consulted in [`Dimension::EVALUATION_ORDER`] and the
    /// first one rejecting the issue decides; later issue fields are not read.
    pub fn excludes<T: IssueFields + ?Sized>(&self, issue: &T) -> bool {
        self.project.rejects(issue.project_code())
            || self.assignee.rejects(assignee_or_sentinel(issue))
            || self.priority.rejects(issue.priority())
            || self.issue_type.rejects(issue.issue_type())
            || self.rejects_components(issue.components())
    }

    fn rejects_components(&self, components: &[String]) -> bool {
        let filter = &self.component;
        if !filter.is_enabled() {
            return false;
        }
        if components.is_empty() {
            return !filter.contains(NO_COMPONENT);
        }
        // Only "no component" is wanted and this issue has some.
        if filter.len() == 1 && filter.contains(NO_COMPONENT) {
            return true;
        }
        !filter
            .keys()
            .filter(|key| *key != NO_COMPONENT)
            .any(|key| components.iter().any(|c| c == key))
    }

    /// Initial checked state of a filter form control.
    pub fn initial_value(&self, dimension: Dimension, key: &str) -> bool {
        let filter = self.dimension(dimension);
        filter.is_enabled() && filter.contains(key)
    }

    /// Display names of the selected keys, for filter summaries.
    pub fn selected_labels(&self, dimension: Dimension) -> Vec<&str> {
        self.dimension(dimension).labels().collect()
    }

    /// Serialize the enabled dimensions as `&name=key1,key2` particles.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for dimension in Dimension::SERIALIZATION_ORDER {
            let filter = self.dimension(dimension);
            if !filter.is_enabled() {
                continue;
            }
            let keys: Vec<String> = filter.keys().map(encode_component).collect();
            query.push('&');
            query.push_str(dimension.param_name());
            query.push('=');
            query.push_str(&keys.join(","));
        }
        query
    }
}

/// An empty assignee key counts as unassigned.
fn assignee_or_sentinel<T: IssueFields + ?Sized>(issue: &T) -> &str {
    issue
        .assignee_key()
        .filter(|k| !k.is_empty())
        .unwrap_or(NO_ASSIGNEE)
}
