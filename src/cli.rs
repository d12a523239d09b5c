//! Command-line interface argument parsing.
//!
//! This module handles CLI argument parsing for both report tools using
//! clap, including validation and default values.

use crate::config::MAX_SCALE;
use clap::{Args as ClapArgs, Parser};
use std::path::PathBuf;

/// Options shared by `sk-dashboard` and `sk-visualize`.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to configuration file
    ///
    /// If not specified, looks for .skreport.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output pixels per chart unit (3.0 gives 300 dpi images)
    #[arg(long, value_name = "FACTOR", env = "SKREPORT_SCALE")]
    pub scale: Option<f32>,

    /// Font family used for chart text
    #[arg(long, value_name = "FAMILY")]
    pub font_family: Option<String>,

    /// Generate a default .skreport.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// sk-dashboard - HTML dashboard for SK frequency router benchmarks
///
/// Reads a JSON array of benchmark results and writes a self-contained
/// HTML dashboard with embedded charts.
///
/// Examples:
///   sk-dashboard benchmark_results.json
///   sk-dashboard benchmark_results.json dashboard.html --sample-rows 20
///   sk-dashboard --init-config
#[derive(Parser, Debug, Clone)]
#[command(name = "sk-dashboard", author, version, about, long_about = None)]
pub struct DashboardArgs {
    /// Benchmark results JSON file
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output HTML file (default: sk_router_dashboard_<timestamp>.html)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Number of decisions shown in the sample table
    #[arg(long, value_name = "COUNT")]
    pub sample_rows: Option<usize>,

    /// Dashboard heading
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// sk-visualize - PNG charts for SK frequency router benchmarks
///
/// Reads a JSON array of benchmark results and writes a timestamped
/// directory of chart images plus a summary image.
///
/// Examples:
///   sk-visualize benchmark_results.json
///   sk-visualize benchmark_results.json out/nightly --scale 2
#[derive(Parser, Debug, Clone)]
#[command(name = "sk-visualize", author, version, about, long_about = None)]
pub struct VisualizeArgs {
    /// Benchmark results JSON file
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output directory prefix; a timestamp is appended
    /// (default: benchmark_visualizations)
    #[arg(value_name = "OUTPUT_PREFIX")]
    pub output_prefix: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommonArgs {
    /// Validate the shared options.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(scale) = self.scale {
            if !(scale > 0.0 && scale <= MAX_SCALE) {
                return Err(format!("Scale must be greater than 0 and at most {}", MAX_SCALE));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    ///
    /// `verbose` is the merged flag (CLI or config file).
    pub fn log_level(&self, verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if verbose || self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Whether progress output should be shown.
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

fn require_input(input: &Option<PathBuf>, usage: &str) -> Result<(), String> {
    match input {
        Some(path) if !path.as_os_str().is_empty() => Ok(()),
        _ => Err(format!("Missing input file.\nUsage: {}", usage)),
    }
}

impl DashboardArgs {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.common.init_config {
            return Ok(());
        }

        require_input(
            &self.input,
            "sk-dashboard <benchmark_results.json> [output_file]",
        )?;
        self.common.validate()
    }
}

impl VisualizeArgs {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.common.init_config {
            return Ok(());
        }

        require_input(
            &self.input,
            "sk-visualize <benchmark_results.json> [output_directory]",
        )?;
        if matches!(self.output_prefix.as_deref(), Some("")) {
            return Err("Output directory prefix must not be empty".to_string());
        }
        self.common.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_dashboard_args() -> DashboardArgs {
        DashboardArgs {
            input: Some(PathBuf::from("results.json")),
            output: None,
            sample_rows: None,
            title: None,
            common: CommonArgs::default(),
        }
    }

    #[test]
    fn test_parse_positional_arguments() {
        let args =
            DashboardArgs::try_parse_from(["sk-dashboard", "results.json", "out.html", "-v"])
                .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("results.json")));
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert!(args.common.verbose);

        let args = VisualizeArgs::try_parse_from(["sk-visualize", "results.json", "charts"]).unwrap();
        assert_eq!(args.output_prefix.as_deref(), Some("charts"));
    }

    #[test]
    fn test_validation_missing_input() {
        let mut args = make_dashboard_args();
        args.input = None;
        let err = args.validate().unwrap_err();
        assert!(err.contains("Usage: sk-dashboard"));

        args.common.init_config = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_dashboard_args();
        args.common.verbose = true;
        args.common.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_scale() {
        let mut args = make_dashboard_args();
        args.common.scale = Some(0.0);
        assert!(args.validate().is_err());
        args.common.scale = Some(2.0);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut common = CommonArgs::default();
        assert_eq!(common.log_level(false), tracing::Level::INFO);
        assert_eq!(common.log_level(true), tracing::Level::DEBUG);

        common.verbose = true;
        assert_eq!(common.log_level(false), tracing::Level::DEBUG);

        common.verbose = false;
        common.quiet = true;
        assert_eq!(common.log_level(true), tracing::Level::ERROR);
        assert!(!common.show_progress());
    }
}
