//! Filter form pre-check command — `board-filter form`.

use anyhow::Result;
use std::path::Path;

use board_filter::errors::BoardError;
use board_filter::filter::Dimension;

use super::load_filtered_board;

pub fn cmd_form(board_path: &Path, dimension: &str, query: &str) -> Result<()> {
    let dimension: Dimension = dimension
        .parse()
        .map_err(|_| BoardError::UnknownDimension(dimension.to_string()))?;
    let filtered = load_filtered_board(board_path, query)?;

    for (key, label) in filtered.board.catalog_entries(dimension) {
        let checked = filtered.filters.initial_value(dimension, key);
        let mark = if checked { "[x]" } else { "[ ]" };
        if key == label {
            println!("{} {}", mark, key);
        } else {
            println!("{} {} ({})", mark, label, key);
        }
    }
    Ok(())
}
