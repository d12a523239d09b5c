//! Analysis modules.
//!
//! Execution time parsing, descriptive statistics, and the per-frequency
//! aggregation shared by both report tools.

pub mod aggregator;
pub mod duration;
pub mod stats;

pub use aggregator::*;
pub use duration::parse_execution_time;
