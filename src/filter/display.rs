//! Which parts of an issue card are shown.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const DETAIL_PARAM: &str = "detail";

/// Card detail toggles. Everything is shown by default; the `detail` query
/// parameter lists the parts that are hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDisplayDetails {
    pub assignee: bool,
    pub summary: bool,
    pub info: bool,
    pub linked_issues: bool,
}

impl Default for IssueDisplayDetails {
    fn default() -> Self {
        Self {
            assignee: true,
            summary: true,
            info: true,
            linked_issues: true,
        }
    }
}

impl IssueDisplayDetails {
    pub fn from_query_params(params: &HashMap<String, String>) -> Self {
        let mut details = Self::default();
        let Some(value) = params.get(DETAIL_PARAM) else {
            return details;
        };
        for token in value.split(',') {
            match token {
                "assignee" => details.assignee = false,
                "description" => details.summary = false,
                "info" => details.info = false,
                "linked" => details.linked_issues = false,
                _ => {}
            }
        }
        details
    }

    /// `&detail=` followed by the hidden parts, or nothing when all are shown.
    pub fn to_query_string(&self) -> String {
        let hidden: Vec<&str> = [
            (self.assignee, "assignee"),
            (self.summary, "description"),
            (self.info, "info"),
            (self.linked_issues, "linked"),
        ]
        .into_iter()
        .filter(|(shown, _)| !shown)
        .map(|(_, token)| token)
        .collect();

        if hidden.is_empty() {
            String::new()
        } else {
            format!("&{}={}", DETAIL_PARAM, hidden.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::query::parse_query_string;

    #[test]
    fn test_default_shows_everything() {
        assert_eq!(IssueDisplayDetails::default().to_query_string(), "");
    }

    #[test]
    fn test_hidden_parts_in_fixed_order() {
        let details = IssueDisplayDetails {
            assignee: true,
            summary: false,
            info: true,
            linked_issues: false,
        };
        assert_eq!(details.to_query_string(), "&detail=description,linked");

        let none = IssueDisplayDetails {
            assignee: false,
            summary: false,
            info: false,
            linked_issues: false,
        };
        assert_eq!(none.to_query_string(), "&detail=assignee,description,info,linked");
    }

    #[test]
    fn test_from_query_params() {
        let params = parse_query_string("board=TEST&detail=linked,assignee,bogus");
        let details = IssueDisplayDetails::from_query_params(&params);
        assert!(!details.assignee);
        assert!(details.summary);
        assert!(details.info);
        assert!(!details.linked_issues);
        assert_eq!(details.to_query_string(), "&detail=assignee,linked");
    }

    #[test]
    fn test_missing_detail_param() {
        let details = IssueDisplayDetails::from_query_params(&HashMap::new());
        assert_eq!(details, IssueDisplayDetails::default());
    }
}
