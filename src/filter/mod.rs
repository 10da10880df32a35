//! Board filter state.
//!
//! A [`FilterSet`] holds one [`DimensionFilter`] per filtering axis, decides
//! whether an issue card is hidden, and round-trips itself through the
//! board URL's query string:
//!
//! | Module      | Responsibility                                         |
//! |-------------|--------------------------------------------------------|
//! | `dimension` | dimensions, sentinel keys, per-dimension selection     |
//! | `query`     | percent-encoding and query parameter parsing           |
//! | `set`       | the aggregate filter and issue evaluation              |
//! | `display`   | which card details are shown (`detail` parameter)      |

pub mod dimension;
pub mod display;
pub mod query;
pub mod set;

pub use dimension::{
    CatalogEntry, Dimension, DimensionFilter, NO_ASSIGNEE, NO_COMPONENT, NONE_LABEL,
};
pub use display::IssueDisplayDetails;
pub use query::{QuerySelections, RawSelection, parse_query_string};
pub use set::{FilterSet, IssueFields};
