//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.skreport.toml` files.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".skreport.toml";

/// Largest accepted rasterization scale.
pub const MAX_SCALE: f32 = 10.0;

/// Largest accepted canvas side in SVG units.
pub const MAX_CANVAS: u32 = 4000;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Chart canvas settings.
    #[serde(default)]
    pub chart: ChartConfig,

    /// Chart colors.
    #[serde(default)]
    pub colors: ColorConfig,

    /// Dashboard settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Visualization directory settings.
    #[serde(default)]
    pub visualize: VisualizeConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Chart canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Canvas width in SVG units.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in SVG units.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Output pixels per SVG unit when rasterizing.
    #[serde(default = "default_scale")]
    pub scale: f32,

    /// Font family used for all chart text.
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Canvas background color.
    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            scale: default_scale(),
            font_family: default_font_family(),
            background: default_background(),
        }
    }
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

fn default_scale() -> f32 {
    3.0 // 300 dpi equivalent at 100 units per inch
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_background() -> String {
    "#ffffff".to_string()
}

/// Bar colors per chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_frequency_color")]
    pub frequency: String,

    #[serde(default = "default_economic_color")]
    pub economic: String,

    #[serde(default = "default_processing_color")]
    pub processing: String,

    #[serde(default = "default_success_color")]
    pub success: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            frequency: default_frequency_color(),
            economic: default_economic_color(),
            processing: default_processing_color(),
            success: default_success_color(),
        }
    }
}

fn default_frequency_color() -> String {
    "#3498db".to_string()
}

fn default_economic_color() -> String {
    "#2ecc71".to_string()
}

fn default_processing_color() -> String {
    "#9b59b6".to_string()
}

fn default_success_color() -> String {
    "#e74c3c".to_string()
}

/// HTML dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Page heading and document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Line shown under the heading.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Number of decisions shown in the sample table.
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,

    /// Prefix of the timestamped default output file.
    #[serde(default = "default_dashboard_prefix")]
    pub output_prefix: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            sample_rows: default_sample_rows(),
            output_prefix: default_dashboard_prefix(),
        }
    }
}

fn default_title() -> String {
    "SK Frequency Router Dashboard".to_string()
}

fn default_subtitle() -> String {
    "Performance Analysis and Visualization".to_string()
}

fn default_sample_rows() -> usize {
    10
}

fn default_dashboard_prefix() -> String {
    "sk_router_dashboard".to_string()
}

/// Chart directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizeConfig {
    /// Prefix of the timestamped output directory.
    #[serde(default = "default_visualize_prefix")]
    pub output_prefix: String,
}

impl Default for VisualizeConfig {
    fn default() -> Self {
        Self {
            output_prefix: default_visualize_prefix(),
        }
    }
}

fn default_visualize_prefix() -> String {
    "benchmark_visualizations".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge the options shared by both tools.
    ///
    /// CLI arguments take precedence over config file settings and only
    /// override values that were given explicitly.
    pub fn merge_with_common(&mut self, args: &crate::cli::CommonArgs) {
        if let Some(scale) = args.scale {
            self.chart.scale = scale;
        }
        if let Some(ref font) = args.font_family {
            self.chart.font_family = font.clone();
        }
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Merge dashboard CLI arguments.
    pub fn merge_with_dashboard_args(&mut self, args: &crate::cli::DashboardArgs) {
        self.merge_with_common(&args.common);

        if let Some(rows) = args.sample_rows {
            self.dashboard.sample_rows = rows;
        }
        if let Some(ref title) = args.title {
            self.dashboard.title = title.clone();
        }
    }

    /// Merge visualization CLI arguments.
    pub fn merge_with_visualize_args(&mut self, args: &crate::cli::VisualizeArgs) {
        self.merge_with_common(&args.common);
    }

    /// Check the merged configuration.
    ///
    /// Runs after CLI arguments are merged, so values from either source
    /// are held to the same limits.
    pub fn validate(&self) -> Result<()> {
        let scale = self.chart.scale;
        if !(scale > 0.0 && scale <= MAX_SCALE) {
            bail!(
                "Chart scale must be greater than 0 and at most {}, got {}",
                MAX_SCALE,
                scale
            );
        }

        for (name, value) in [("width", self.chart.width), ("height", self.chart.height)] {
            if value == 0 || value > MAX_CANVAS {
                bail!(
                    "Chart {} must be between 1 and {}, got {}",
                    name,
                    MAX_CANVAS,
                    value
                );
            }
        }

        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chart.width, 1000);
        assert_eq!(config.chart.scale, 3.0);
        assert_eq!(config.dashboard.sample_rows, 10);
        assert_eq!(config.colors.frequency, "#3498db");
        assert_eq!(config.visualize.output_prefix, "benchmark_visualizations");
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
[general]
verbose = true

[chart]
scale = 1.5
font_family = "DejaVu Sans"

[colors]
success = "#c0392b"

[dashboard]
title = "Nightly Router Benchmark"
sample_rows = 25
"##;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.chart.scale, 1.5);
        assert_eq!(config.chart.width, 1000);
        assert_eq!(config.chart.font_family, "DejaVu Sans");
        assert_eq!(config.colors.success, "#c0392b");
        assert_eq!(config.colors.economic, "#2ecc71");
        assert_eq!(config.dashboard.title, "Nightly Router Benchmark");
        assert_eq!(config.dashboard.sample_rows, 25);
        assert_eq!(config.dashboard.output_prefix, "sk_router_dashboard");
    }

    #[test]
    fn test_validate_limits_config_file_values() {
        assert!(Config::default().validate().is_ok());

        let config: Config = toml::from_str("[chart]\nscale = 200.0").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scale"));

        let config: Config = toml::from_str("[chart]\nwidth = 0").unwrap();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.chart.scale = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_scale_is_validated_after_merge() {
        let mut config: Config = toml::from_str("[chart]\nscale = 50.0").unwrap();
        let args = crate::cli::CommonArgs {
            scale: Some(2.0),
            ..Default::default()
        };
        config.merge_with_common(&args);
        assert!(config.validate().is_ok());
        assert_eq!(config.chart.scale, 2.0);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[chart]"));
        assert!(toml_str.contains("[dashboard]"));
        assert!(toml_str.contains("[visualize]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.dashboard.sample_rows, 10);
    }
}
