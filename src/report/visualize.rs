//! Chart image directory generation.

use super::summary::summary_lines;
use super::{chart_progress, frequency_labels, timestamp_suffix};
use crate::analysis::AggregateResult;
use crate::chart::{BarChart, BoxPlot, ChartStyle, Rasterizer, TextPanel};
use crate::config::Config;
use crate::error::{ReportError, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const FREQUENCY_FILE: &str = "frequency_distribution.png";
pub const ECONOMIC_FILE: &str = "economic_value_distribution.png";
pub const PROCESSING_FILE: &str = "processing_time.png";
pub const SUMMARY_FILE: &str = "summary.png";

const SUMMARY_TITLE: &str = "SK Frequency Router Performance Summary";

/// Output directory: `<prefix>_<YYYYmmdd_HHMMSS>`.
pub fn output_dir(prefix: &str, now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("{}_{}", prefix, timestamp_suffix(now)))
}

/// Decision counts per frequency with count and share annotations.
pub fn frequency_distribution_chart(result: &AggregateResult, config: &Config) -> BarChart {
    let counts: Vec<f64> = result.by_frequency.iter().map(|s| s.count as f64).collect();
    let top = result
        .by_frequency
        .iter()
        .map(|s| Some(s.count.to_string()))
        .collect();
    let inner = result
        .by_frequency
        .iter()
        .map(|s| (s.count > 0).then(|| format!("{:.1}%", s.percentage)))
        .collect();

    BarChart::new("Frequency Distribution", frequency_labels(), counts)
        .axis_labels("Frequency", "Number of Decisions")
        .color(&config.colors.frequency)
        .legend("SK Router")
        .bar_width(0.35)
        .top_labels(top)
        .inner_labels(inner)
}

/// Economic value spread per frequency, or `None` when no category has values.
pub fn economic_value_boxplot(result: &AggregateResult, config: &Config) -> Option<BoxPlot> {
    let groups = result
        .by_frequency
        .iter()
        .map(|s| (s.frequency.to_string(), s.economic_values.clone()))
        .collect();

    let plot = BoxPlot::new("Economic Value Distribution by Frequency", groups)
        .axis_labels("Frequency", "Economic Value")
        .color(&config.colors.economic);

    (!plot.is_empty()).then_some(plot)
}

/// Average processing time per frequency, or `None` without timing data.
pub fn processing_time_chart(result: &AggregateResult, config: &Config) -> Option<BarChart> {
    if !result.has_processing_data() {
        return None;
    }

    let values: Vec<f64> = result
        .by_frequency
        .iter()
        .map(|s| s.avg_processing_ms)
        .collect();
    let labels = result
        .by_frequency
        .iter()
        .map(|s| (s.timed > 0).then(|| format!("{:.1} ms", s.avg_processing_ms)))
        .collect();

    Some(
        BarChart::new("Average Processing Time by Frequency", frequency_labels(), values)
            .axis_labels("Frequency", "Processing Time (ms)")
            .color(&config.colors.processing)
            .top_labels(labels)
            .grid(true),
    )
}

/// Text panel restating every aggregate statistic.
pub fn summary_panel(result: &AggregateResult) -> TextPanel {
    TextPanel::new(SUMMARY_TITLE, summary_lines(result))
}

/// Render every applicable chart into `dir`, creating it if needed.
///
/// Returns the written files in the order they were produced.
pub fn create_visualizations(
    result: &AggregateResult,
    config: &Config,
    dir: &Path,
    show_progress: bool,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let style = ChartStyle::from(&config.chart);
    let rasterizer = Rasterizer::new(&config.chart.font_family, config.chart.scale);

    let mut charts: Vec<(&str, String)> = vec![(
        FREQUENCY_FILE,
        frequency_distribution_chart(result, config).to_svg(&style),
    )];
    match economic_value_boxplot(result, config) {
        Some(plot) => charts.push((ECONOMIC_FILE, plot.to_svg(&style))),
        None => debug!("No economic values; skipping {}", ECONOMIC_FILE),
    }
    match processing_time_chart(result, config) {
        Some(chart) => charts.push((PROCESSING_FILE, chart.to_svg(&style))),
        None => debug!("No processing times; skipping {}", PROCESSING_FILE),
    }
    charts.push((SUMMARY_FILE, summary_panel(result).to_svg(&style)));

    let progress = chart_progress(charts.len() as u64, show_progress);
    let mut written = Vec::with_capacity(charts.len());

    for (file_name, svg) in charts {
        progress.set_message(file_name.to_string());
        let png = rasterizer.render_png(file_name, &svg)?;
        let path = dir.join(file_name);
        std::fs::write(&path, png).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {}", path.display());
        written.push(path);
        progress.inc(1);
    }

    progress.finish_and_clear();
    info!("Wrote {} charts to {}", written.len(), dir.display());
    Ok(written)
}
