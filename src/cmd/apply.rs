//! Board filtering command — `board-filter apply`.

use anyhow::Result;
use serde_json::{Map, Value, json};
use std::path::Path;

use board_filter::IssueDisplayDetails;
use board_filter::board::BoardIssue;
use board_filter::config::OutputFormat;
use board_filter::filter::Dimension;

use super::load_filtered_board;

pub fn cmd_apply(board_path: &Path, query: &str, format: OutputFormat) -> Result<()> {
    let filtered = load_filtered_board(board_path, query)?;
    let details = IssueDisplayDetails::from_query_params(&filtered.params);
    let visible = filtered.board.visible_issues(&filtered.filters);
    let canonical = format!(
        "{}{}",
        filtered.filters.to_query_string(),
        details.to_query_string()
    );

    tracing::info!(
        board = %filtered.board.code,
        visible = visible.len(),
        total = filtered.board.issues.len(),
        "applied filters"
    );

    match format {
        OutputFormat::Json => {
            let issues: Vec<Value> = visible
                .iter()
                .map(|issue| issue_json(issue, &details))
                .collect();
            let output = json!({
                "board": filtered.board.code,
                "query": canonical,
                "total": filtered.board.issues.len(),
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {}: {} of {} issues visible",
                console::style("Board").bold(),
                console::style(&filtered.board.code).cyan(),
                visible.len(),
                filtered.board.issues.len()
            );
            for dimension in Dimension::SERIALIZATION_ORDER {
                let labels = filtered.filters.selected_labels(dimension);
                if !labels.is_empty() {
                    println!("  {:<11} {}", format!("{}:", dimension), labels.join(", "));
                }
            }
            println!();
            for issue in &visible {
                println!("{}", issue_line(issue, &details));
            }
            if !canonical.is_empty() {
                println!();
                println!("Query: {}", canonical);
            }
        }
    }
    Ok(())
}

fn issue_line(issue: &BoardIssue, details: &IssueDisplayDetails) -> String {
    let mut line = format!("{:<10}", issue.key);
    if details.info {
        let mut info = vec![issue.priority.as_str(), issue.issue_type.as_str()];
        info.extend(issue.components.iter().map(String::as_str));
        line.push_str(&format!(" [{}]", info.join(" ")));
    }
    if details.summary && !issue.summary.is_empty() {
        line.push(' ');
        line.push_str(&issue.summary);
    }
    if details.assignee {
        let assignee = issue.assignee.as_deref().unwrap_or("unassigned");
        line.push_str(&format!(" ({})", console::style(assignee).dim()));
    }
    if details.linked_issues && !issue.linked_issues.is_empty() {
        line.push_str(&format!(" -> {}", issue.linked_issues.join(", ")));
    }
    line
}

fn issue_json(issue: &BoardIssue, details: &IssueDisplayDetails) -> Value {
    let mut fields = Map::new();
    fields.insert("key".into(), json!(issue.key));
    fields.insert("project_code".into(), json!(issue.project_code));
    if details.summary {
        fields.insert("summary".into(), json!(issue.summary));
    }
    if details.assignee {
        fields.insert("assignee".into(), json!(issue.assignee));
    }
    if details.info {
        fields.insert("priority".into(), json!(issue.priority));
        fields.insert("type".into(), json!(issue.issue_type));
        fields.insert("components".into(), json!(issue.components));
    }
    if details.linked_issues {
        fields.insert("linked_issues".into(), json!(issue.linked_issues));
    }
    Value::Object(fields)
}
