//! Run workflows shared by the two binaries.

use crate::analysis::{aggregate, AggregateResult};
use crate::cli::{CommonArgs, DashboardArgs, VisualizeArgs};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::loader::load_records;
use crate::logging::init_logging;
use crate::report::{dashboard, summary, visualize};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    CurrentDir,
    /// The default file exists but could not be loaded.
    InvalidDefault(String),
    BuiltIn,
}

impl ConfigSource {
    /// Log the source once logging is up.
    pub fn log(&self) {
        match self {
            ConfigSource::Explicit(path) => info!("Loaded config from: {}", path.display()),
            ConfigSource::CurrentDir => info!("Loaded default config from {}", CONFIG_FILE_NAME),
            ConfigSource::InvalidDefault(reason) => {
                warn!("Failed to load config: {}", reason);
            }
            ConfigSource::BuiltIn => debug!("No config file found, using defaults"),
        }
    }
}

/// Load configuration before logging is initialized.
///
/// An explicit `--config` path must load; a broken default file falls back
/// to built-in defaults.
pub fn load_config(args: &CommonArgs) -> Result<(Config, ConfigSource)> {
    if let Some(ref path) = args.config {
        let config = Config::load(path)?;
        return Ok((config, ConfigSource::Explicit(path.clone())));
    }

    match Config::load_default() {
        Ok(Some(config)) => Ok((config, ConfigSource::CurrentDir)),
        Ok(None) => Ok((Config::default(), ConfigSource::BuiltIn)),
        Err(e) => Ok((Config::default(), ConfigSource::InvalidDefault(format!("{:#}", e)))),
    }
}

/// Handle --init-config: write a default configuration file.
///
/// Returns `Ok(false)` when a file already exists and was left untouched.
pub fn handle_init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            path.display()
        );
        return Ok(false);
    }

    std::fs::write(path, Config::default_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✅ Created {} with default settings.", path.display());
    println!("   Edit it to customize chart size, colors, and output names.");
    Ok(true)
}

/// A report binary: its arguments, config merge and workflow.
pub trait Tool: std::fmt::Debug {
    /// Binary name used in log lines.
    const NAME: &'static str;

    fn check(&self) -> std::result::Result<(), String>;
    fn common(&self) -> &CommonArgs;
    fn apply(&self, config: &mut Config);
    fn execute(&self, config: &Config) -> Result<()>;
}

impl Tool for DashboardArgs {
    const NAME: &'static str = "sk-dashboard";

    fn check(&self) -> std::result::Result<(), String> {
        self.validate()
    }

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn apply(&self, config: &mut Config) {
        config.merge_with_dashboard_args(self);
    }

    fn execute(&self, config: &Config) -> Result<()> {
        run_dashboard(self, config)
    }
}

impl Tool for VisualizeArgs {
    const NAME: &'static str = "sk-visualize";

    fn check(&self) -> std::result::Result<(), String> {
        self.validate()
    }

    fn common(&self) -> &CommonArgs {
        &self.common
    }

    fn apply(&self, config: &mut Config) {
        config.merge_with_visualize_args(self);
    }

    fn execute(&self, config: &Config) -> Result<()> {
        run_visualize(self, config)
    }
}

/// Full binary flow: validate, init-config, config, logging, run.
///
/// Returns the process exit code.
pub fn run_tool<T: Tool>(args: &T) -> i32 {
    if let Err(e) = args.check() {
        eprintln!("Error: {}", e);
        return 1;
    }

    // Handle --init-config early (no logging needed)
    if args.common().init_config {
        return match handle_init_config(Path::new(CONFIG_FILE_NAME)) {
            Ok(true) => 0,
            Ok(false) => 1,
            Err(e) => {
                eprintln!("\n❌ Error: {:#}", e);
                1
            }
        };
    }

    let config = match prepare_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            return 1;
        }
    };

    info!("{} v{}", T::NAME, env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match args.execute(&config) {
        Ok(()) => 0,
        Err(e) => {
            error!("{} failed: {:#}", T::NAME, e);
            eprintln!("\n❌ Error: {:#}", e);
            1
        }
    }
}

/// Load, merge and validate the configuration, then start logging.
fn prepare_config<T: Tool>(args: &T) -> Result<Config> {
    let (mut config, source) = load_config(args.common())?;
    args.apply(&mut config);
    config.validate()?;

    init_logging(args.common().log_level(config.general.verbose));
    source.log();
    Ok(config)
}

/// Load and aggregate the benchmark file.
fn load_and_aggregate(input: &Path, quiet: bool) -> Result<AggregateResult> {
    if !quiet {
        println!("📥 Loading benchmark results: {}", input.display());
    }

    let values = load_records(input)?;
    let result = aggregate(&values);
    if result.total() == 0 {
        warn!("No routing decisions found in {}", input.display());
    }

    if !quiet {
        println!("\n{}", summary::console_summary(&result));
    }
    Ok(result)
}

/// Run the dashboard workflow.
pub fn run_dashboard(args: &DashboardArgs, config: &Config) -> Result<()> {
    let start_time = Instant::now();
    let quiet = args.common.quiet;
    let input = args.input.as_deref().context("No input file given")?;

    let result = load_and_aggregate(input, quiet)?;

    let now = Local::now();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| dashboard::default_output_path(&config.dashboard.output_prefix, now));

    if !quiet {
        println!("\n📝 Generating dashboard...");
    }
    dashboard::write_dashboard(&result, config, &output, now, args.common.show_progress())
        .with_context(|| format!("Failed to generate dashboard {}", output.display()))?;

    debug!("Dashboard finished in {:.2}s", start_time.elapsed().as_secs_f64());
    if !quiet {
        println!("\n✅ Dashboard generated: {}", output.display());
    }
    Ok(())
}

/// Run the chart directory workflow.
pub fn run_visualize(args: &VisualizeArgs, config: &Config) -> Result<()> {
    let start_time = Instant::now();
    let quiet = args.common.quiet;
    let input = args.input.as_deref().context("No input file given")?;

    let result = load_and_aggregate(input, quiet)?;

    let prefix = args
        .output_prefix
        .as_deref()
        .unwrap_or(&config.visualize.output_prefix);
    let dir = visualize::output_dir(prefix, Local::now());

    if !quiet {
        println!("\n📊 Rendering charts...");
    }
    let written =
        visualize::create_visualizations(&result, config, &dir, args.common.show_progress())
            .with_context(|| format!("Failed to create visualizations in {}", dir.display()))?;

    debug!("Visualization finished in {:.2}s", start_time.elapsed().as_secs_f64());
    if !quiet {
        for path in &written {
            println!("   - {}", path.display());
        }
        println!("\n✅ Visualizations saved to: {}", dir.display());
    }
    Ok(())
}
