//! Error types for loading, rendering and writing reports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the report pipeline.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON.
    #[error("failed to parse {} as JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The input file is valid JSON but not an array of records.
    #[error("expected a JSON array of benchmark records in {}", path.display())]
    NotAnArray { path: PathBuf },

    /// A chart SVG could not be parsed by the rasterizer.
    #[error("failed to parse SVG for chart '{chart}': {reason}")]
    Svg { chart: String, reason: String },

    /// A chart could not be rasterized or encoded as PNG.
    #[error("failed to rasterize chart '{chart}': {reason}")]
    Raster { chart: String, reason: String },

    /// An output file or directory could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ReportError>;
