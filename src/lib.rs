//! SK Router Report - dashboards and charts for frequency router benchmarks
//!
//! Reads the JSON array written by the SK frequency router benchmark and
//! renders either a self-contained HTML dashboard (`sk-dashboard`) or a
//! directory of PNG charts (`sk-visualize`).
//!
//! Exit codes for both binaries:
//!   0 - Success
//!   1 - Invalid arguments, unreadable input, or a render/write failure

pub mod analysis;
pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod report;

pub use error::{ReportError, Result};
