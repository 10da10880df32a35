//! Query normalization command — `board-filter query`.

use anyhow::Result;
use std::path::Path;

use board_filter::IssueDisplayDetails;

use super::load_filtered_board;

/// Print the query a board view would write back to its URL for `query`.
pub fn cmd_query(board_path: &Path, query: &str) -> Result<()> {
    let filtered = load_filtered_board(board_path, query)?;
    let details = IssueDisplayDetails::from_query_params(&filtered.params);
    println!(
        "{}{}",
        filtered.filters.to_query_string(),
        details.to_query_string()
    );
    Ok(())
}
