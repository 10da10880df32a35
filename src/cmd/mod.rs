//! CLI command implementations.
//!
//! | Module   | Commands handled |
//! |----------|------------------|
//! | `apply`  | `Apply`          |
//! | `query`  | `Query`          |
//! | `form`   | `Form`           |
//! | `config` | `Config`         |

pub mod apply;
pub mod config;
pub mod form;
pub mod query;

pub use apply::cmd_apply;
pub use config::{cmd_config_init, cmd_config_show};
pub use form::cmd_form;
pub use query::cmd_query;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use board_filter::BoardSnapshot;
use board_filter::filter::{FilterSet, QuerySelections, parse_query_string};

/// A board snapshot with the filters of a query applied to its catalogs.
pub(crate) struct FilteredBoard {
    pub board: BoardSnapshot,
    pub params: HashMap<String, String>,
    pub filters: FilterSet,
}

pub(crate) fn load_filtered_board(board_path: &Path, query: &str) -> Result<FilteredBoard> {
    let board = BoardSnapshot::load(board_path)
        .with_context(|| format!("Failed to load board {}", board_path.display()))?;
    let params = parse_query_string(query);
    let filters = board.filters_from_query(&QuerySelections::from_query_params(&params));
    Ok(FilteredBoard {
        board,
        params,
        filters,
    })
}
