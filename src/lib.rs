pub mod board;
pub mod config;
pub mod errors;
pub mod filter;

pub use board::BoardSnapshot;
pub use filter::{Dimension, FilterSet, IssueDisplayDetails};
