//! HTML dashboard generation.
//!
//! This module renders the four dashboard charts, embeds them as base64
//! PNG data URIs and assembles a single self-contained HTML page.

use super::summary::format_number;
use super::{chart_progress, escape_html, frequency_labels, timestamp_suffix};
use crate::analysis::AggregateResult;
use crate::chart::{BarChart, ChartStyle, Rasterizer};
use crate::config::{Config, DashboardConfig};
use crate::error::{ReportError, Result};
use base64::Engine as _;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base64-encoded PNG charts embedded in the dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardCharts {
    pub frequency: String,
    pub economic: String,
    /// Absent when no decision carried a processing time.
    pub processing_time: Option<String>,
    pub success: String,
}

/// Default output path: `<prefix>_<YYYYmmdd_HHMMSS>.html`.
pub fn default_output_path(prefix: &str, now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("{}_{}.html", prefix, timestamp_suffix(now)))
}

/// Bar chart of decision counts with count and percentage annotations.
pub fn frequency_chart(result: &AggregateResult, config: &Config) -> BarChart {
    let counts: Vec<f64> = result.by_frequency.iter().map(|s| s.count as f64).collect();
    let top = result
        .by_frequency
        .iter()
        .map(|s| (s.count > 0).then(|| s.count.to_string()))
        .collect();
    let inner = result
        .by_frequency
        .iter()
        .map(|s| (s.count > 0).then(|| format!("{:.1}%", s.percentage)))
        .collect();

    BarChart::new("Frequency Distribution", frequency_labels(), counts)
        .axis_labels("Frequency", "Count")
        .color(&config.colors.frequency)
        .top_labels(top)
        .inner_labels(inner)
}

/// Average economic value per frequency on a fixed 0-100 axis.
pub fn economic_chart(result: &AggregateResult, config: &Config) -> BarChart {
    let values: Vec<f64> = result
        .by_frequency
        .iter()
        .map(|s| s.avg_economic_value)
        .collect();
    let labels = values
        .iter()
        .map(|v| (*v > 0.0).then(|| format!("{:.1}", v)))
        .collect();

    BarChart::new("Average Economic Value by Frequency", frequency_labels(), values)
        .axis_labels("Frequency", "Average Economic Value")
        .color(&config.colors.economic)
        .y_range(0.0, 100.0)
        .top_labels(labels)
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
    let labels = values
        .iter()
        .map(|v| (*v > 0.0).then(|| format!("{:.1} ms", v)))
        .collect();

    Some(
        BarChart::new("Average Processing Time by Frequency", frequency_labels(), values)
            .axis_labels("Frequency", "Average Processing Time (ms)")
            .color(&config.colors.processing)
            .top_labels(labels),
    )
}

/// Success rate per frequency on a fixed 0-100 axis.
pub fn success_rate_chart(result: &AggregateResult, config: &Config) -> BarChart {
    let values: Vec<f64> = result.by_frequency.iter().map(|s| s.success_rate).collect();
    let labels = values
        .iter()
        .map(|v| (*v > 0.0).then(|| format!("{:.1}%", v)))
        .collect();

    BarChart::new("Success Rate by Frequency", frequency_labels(), values)
        .axis_labels("Frequency", "Success Rate (%)")
        .color(&config.colors.success)
        .y_range(0.0, 100.0)
        .top_labels(labels)
}

/// Render all dashboard charts to base64 PNG.
pub fn render_charts(
    result: &AggregateResult,
    config: &Config,
    rasterizer: &Rasterizer,
    show_progress: bool,
) -> Result<DashboardCharts> {
    let style = ChartStyle::from(&config.chart);
    let processing = processing_time_chart(result, config);
    let total = if processing.is_some() { 4 } else { 3 };
    let progress = chart_progress(total, show_progress);

    let encode = |name: &str, chart: &BarChart| -> Result<String> {
        progress.set_message(name.to_string());
        let png = rasterizer.render_png(name, &chart.to_svg(&style))?;
        progress.inc(1);
        Ok(base64::engine::general_purpose::STANDARD.encode(png))
    };

    let charts = DashboardCharts {
        frequency: encode("frequency", &frequency_chart(result, config))?,
        economic: encode("economic value", &economic_chart(result, config))?,
        processing_time: processing
            .as_ref()
            .map(|chart| encode("processing time", chart))
            .transpose()?,
        success: encode("success rate", &success_rate_chart(result, config))?,
    };

    progress.finish_and_clear();
    Ok(charts)
}

const STYLESHEET: &str = r#"
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 0; background-color: #f5f7fa; color: #333; }
        .container { max-width: 1200px; margin: 0 auto; padding: 20px; }
        header { background-color: #34495e; color: white; padding: 20px; text-align: center; margin-bottom: 20px; }
        h1, h2, h3 { margin: 0; }
        h2 { margin-bottom: 15px; }
        .subtitle { margin-top: 10px; font-weight: normal; opacity: 0.8; }
        .metrics-container, .chart-container { display: flex; flex-wrap: wrap; gap: 20px; margin-bottom: 30px; }
        .card { background-color: white; border-radius: 8px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); padding: 20px; }
        .metric-card { flex: 1; min-width: 200px; }
        .metric-title { font-size: 14px; color: #7f8c8d; margin-bottom: 10px; }
        .metric-value { font-size: 28px; font-weight: bold; color: #2c3e50; }
        .chart-card { flex: 1 1 calc(50% - 20px); }
        .chart-title { font-size: 18px; margin-bottom: 15px; color: #2c3e50; }
        .chart { width: 100%; height: auto; }
        .chart-placeholder { min-height: 200px; }
        .frequency-section, .decisions-table { margin-bottom: 30px; }
        .frequency-metric { margin-bottom: 10px; position: relative; padding-bottom: 15px; }
        .freq-name { display: inline-block; width: 120px; font-weight: bold; }
        .freq-count { display: inline-block; width: 50px; text-align: right; }
        .freq-percentage { display: inline-block; width: 60px; text-align: right; }
        .freq-bar { position: absolute; height: 5px; background-color: #3498db; bottom: 0; left: 0; border-radius: 2px; }
        .decisions-table { overflow-x: auto; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { padding: 12px 15px; text-align: left; border-bottom: 1px solid #e1e1e1; }
        th { background-color: #f8f9fa; font-weight: bold; }
        tr:hover { background-color: #f5f5f5; }
        footer { text-align: center; margin-top: 30px; padding: 20px; color: #7f8c8d; font-size: 14px; }
"#;

/// Generate the complete dashboard document.
pub fn generate_html_dashboard(
    result: &AggregateResult,
    charts: &DashboardCharts,
    config: &DashboardConfig,
    generated_at: DateTime<Local>,
) -> String {
    let mut output = String::new();

    let title = escape_html(&config.title);
    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("    <meta charset=\"UTF-8\">\n");
    output.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    output.push_str(&format!("    <title>{}</title>\n", title));
    output.push_str(&format!("    <style>{}    </style>\n", STYLESHEET));
    output.push_str("</head>\n<body>\n");

    output.push_str(&format!(
        "    <header>\n        <h1>{}</h1>\n        <p class=\"subtitle\">{}</p>\n    </header>\n",
        title,
        escape_html(&config.subtitle)
    ));

    output.push_str("    <div class=\"container\">\n");
    output.push_str(&generate_metrics_section(result));
    output.push_str(&generate_charts_section(charts));
    output.push_str(&generate_frequency_section(result));
    output.push_str(&generate_decisions_table(result, config.sample_rows));
    output.push_str(&generate_footer(&config.title, generated_at));
    output.push_str("    </div>\n</body>\n</html>\n");

    output
}

/// Generate the summary metric cards.
fn generate_metrics_section(result: &AggregateResult) -> String {
    let metrics = [
        ("Total Decisions", result.total().to_string()),
        (
            "Average Economic Value",
            format!("{:.1}/100", result.avg_economic_value()),
        ),
        (
            "Average Processing Time",
            format!("{:.1} ms", result.avg_processing_ms()),
        ),
        ("Success Rate", format!("{:.1}%", result.success_rate())),
    ];

    let mut section = String::new();
    section.push_str("        <div class=\"metrics-container\">\n");
    for (title, value) in metrics {
        section.push_str(&format!(
            "            <div class=\"card metric-card\">\n                <div class=\"metric-title\">{}</div>\n                <div class=\"metric-value\">{}</div>\n            </div>\n",
            title, value
        ));
    }
    section.push_str("        </div>\n");

    section
}

/// Generate one chart card; an absent chart leaves the slot blank.
fn generate_chart_card(title: &str, png_base64: Option<&str>) -> String {
    let body = match png_base64 {
        Some(data) => format!(
            "<img class=\"chart\" src=\"data:image/png;base64,{}\" alt=\"{}\">",
            data, title
        ),
        None => "<div class=\"chart-placeholder\"></div>".to_string(),
    };

    format!(
        "            <div class=\"card chart-card\">\n                <div class=\"chart-title\">{}</div>\n                {}\n            </div>\n",
        title, body
    )
}

/// Generate the two rows of chart cards.
fn generate_charts_section(charts: &DashboardCharts) -> String {
    let mut section = String::new();

    section.push_str("        <div class=\"chart-container\">\n");
    section.push_str(&generate_chart_card(
        "Frequency Distribution",
        Some(charts.frequency.as_str()),
    ));
    section.push_str(&generate_chart_card(
        "Economic Value by Frequency",
        Some(charts.economic.as_str()),
    ));
    section.push_str("        </div>\n");

    section.push_str("        <div class=\"chart-container\">\n");
    section.push_str(&generate_chart_card(
        "Processing Time by Frequency",
        charts.processing_time.as_deref(),
    ));
    section.push_str(&generate_chart_card(
        "Success Rate by Frequency",
        Some(charts.success.as_str()),
    ));
    section.push_str("        </div>\n");

    section
}

/// Generate the per-frequency breakdown with proportional bars.
fn generate_frequency_section(result: &AggregateResult) -> String {
    let mut section = String::new();

    section.push_str("        <div class=\"card frequency-section\">\n");
    section.push_str("            <h2>Frequency Distribution</h2>\n");
    for stats in &result.by_frequency {
        section.push_str(&format!(
            "            <div class=\"frequency-metric\">\n                <div class=\"freq-name\">{}</div>\n                <div class=\"freq-count\">{}</div>\n                <div class=\"freq-percentage\">{:.1}%</div>\n                <div class=\"freq-bar\" style=\"width: {:.1}%\"></div>\n            </div>\n",
            stats.frequency, stats.count, stats.percentage, stats.percentage
        ));
    }
    section.push_str("        </div>\n");

    section
}

/// Generate the sample decisions table.
fn generate_decisions_table(result: &AggregateResult, max_rows: usize) -> String {
    let mut section = String::new();

    section.push_str("        <div class=\"card decisions-table\">\n");
    section.push_str("            <h2>Sample Routing Decisions</h2>\n");
    section.push_str("            <table>\n                <thead>\n                    <tr>\n");
    for header in ["Goal", "Context", "Frequency", "Economic Value", "Success"] {
        section.push_str(&format!("                        <th>{}</th>\n", header));
    }
    section.push_str("                    </tr>\n                </thead>\n                <tbody>\n");

    for decision in result.decisions.iter().take(max_rows) {
        section.push_str(&format!(
            "                    <tr>\n                        <td>{}</td>\n                        <td>{}</td>\n                        <td>{}</td>\n                        <td>{}</td>\n                        <td>{}</td>\n                    </tr>\n",
            escape_html(&decision.goal),
            escape_html(&decision.context),
            decision.frequency,
            format_number(decision.economic_value),
            decision.success_glyph()
        ));
    }

    section.push_str("                </tbody>\n            </table>\n        </div>\n");

    section
}

/// Generate the page footer.
fn generate_footer(title: &str, generated_at: DateTime<Local>) -> String {
    format!(
        "        <footer>\n            <p>Generated on {} • {}</p>\n        </footer>\n",
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        escape_html(title)
    )
}

/// Render the charts, build the dashboard and write it to `path`.
pub fn write_dashboard(
    result: &AggregateResult,
    config: &Config,
    path: &Path,
    generated_at: DateTime<Local>,
    show_progress: bool,
) -> Result<()> {
    let rasterizer = Rasterizer::new(&config.chart.font_family, config.chart.scale);
    let charts = render_charts(result, config, &rasterizer, show_progress)?;
    let html = generate_html_dashboard(result, &charts, &config.dashboard, generated_at);
    debug!("Dashboard document is {} bytes", html.len());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, html).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Dashboard written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
    }

    fn sample_values() -> Vec<Value> {
        vec![
            json!({"RecommendedFrequency": "immediate", "Goal": "Restore <checkout>", "Context": "Outage & alerts", "EconomicValue": 95, "ExecutionTime": "150000 Ticks"}),
            json!({"RecommendedFrequency": "immediate", "Goal": "Patch CVE", "EconomicValue": 88.5, "WasSuccessful": false}),
            json!({"RecommendedFrequency": "immediate", "Goal": "Roll back deploy", "EconomicValue": 90}),
            json!({"RecommendedFrequency": "evolution", "Goal": "Re-platform", "EconomicValue": 60, "ExecutionTime": "0:00:00.5"}),
            json!({"RecommendedFrequency": "evolution", "Goal": "New market", "EconomicValue": 55}),
            json!({"Router": "keyword", "Goal": "ignored"}),
        ]
    }

    fn fake_charts(with_processing: bool) -> DashboardCharts {
        DashboardCharts {
            frequency: "RlJFUQ==".to_string(),
            economic: "RUNPTg==".to_string(),
            processing_time: with_processing.then(|| "UFJPQw==".to_string()),
            success: "U1VDQw==".to_string(),
        }
    }

    #[test]
    fn test_default_output_path() {
        let path = default_output_path("sk_router_dashboard", fixed_time());
        assert_eq!(path, PathBuf::from("sk_router_dashboard_20240517_093000.html"));
    }

    #[test]
    fn test_generate_html_dashboard() {
        let result = aggregate(&sample_values());
        let html = generate_html_dashboard(
            &result,
            &fake_charts(true),
            &DashboardConfig::default(),
            fixed_time(),
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>SK Frequency Router Dashboard</title>"));
        assert!(html.contains("<div class=\"metric-value\">5</div>"));
        assert!(html.contains("<div class=\"metric-value\">80.0%</div>"));
        assert!(html.contains("data:image/png;base64,RlJFUQ=="));
        assert!(html.contains("data:image/png;base64,UFJPQw=="));
        assert!(html.contains("<div class=\"freq-percentage\">60.0%</div>"));
        assert!(html.contains("<div class=\"freq-percentage\">40.0%</div>"));
        assert!(html.contains("Generated on 2024-05-17 09:30:00"));
        assert!(!html.contains("ignored"));
    }

    #[test]
    fn test_all_categories_listed_in_order() {
        let result = aggregate(&sample_values());
        let html = generate_frequency_section(&result);
        let positions: Vec<usize> = frequency_labels()
            .iter()
            .map(|f| html.find(&format!(">{}</div>", f)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("<div class=\"freq-bar\" style=\"width: 0.0%\"></div>"));
    }

    #[test]
    fn test_decisions_table_escapes_and_limits() {
        let result = aggregate(&sample_values());
        let table = generate_decisions_table(&result, 2);

        assert!(table.contains("Restore &lt;checkout&gt;"));
        assert!(table.contains("Outage &amp; alerts"));
        assert!(table.contains("<td>95</td>"));
        assert!(table.contains("<td>88.5</td>"));
        assert!(table.contains("❌"));
        assert!(!table.contains("Roll back deploy"));
    }

    #[test]
    fn test_missing_processing_chart_leaves_slot_blank() {
        let section = generate_charts_section(&fake_charts(false));
        assert!(section.contains("Processing Time by Frequency"));
        assert!(section.contains("<div class=\"chart-placeholder\"></div>"));
        assert_eq!(section.matches("<img").count(), 3);
    }

    #[test]
    fn test_empty_result_has_zero_metrics() {
        let result = aggregate(&[]);
        let html = generate_html_dashboard(
            &result,
            &fake_charts(false),
            &DashboardConfig::default(),
            fixed_time(),
        );
        assert!(html.contains("<div class=\"metric-value\">0</div>"));
        assert!(html.contains("<div class=\"metric-value\">0.0/100</div>"));
        assert!(html.contains("<div class=\"metric-value\">0.0 ms</div>"));
        assert!(html.contains("<div class=\"metric-value\">0.0%</div>"));
        assert!(!html.contains("NaN"));
        assert!(html.contains("<tbody>\n                </tbody>"));
    }

    #[test]
    fn test_chart_builders() {
        let config = Config::default();
        let result = aggregate(&sample_values());

        let freq = frequency_chart(&result, &config);
        assert_eq!(freq.values, vec![3.0, 0.0, 0.0, 0.0, 2.0]);
        assert_eq!(freq.inner_labels[0].as_deref(), Some("60.0%"));
        assert_eq!(freq.top_labels[1], None);

        let economic = economic_chart(&result, &config);
        assert_eq!(economic.y_range, Some((0.0, 100.0)));
        assert_eq!(economic.values[1], 0.0);

        let processing = processing_time_chart(&result, &config).unwrap();
        assert_eq!(processing.values[0], 15.0);
        assert_eq!(processing.top_labels[4].as_deref(), Some("500.0 ms"));

        let success = success_rate_chart(&result, &config);
        assert_eq!(success.top_labels[0].as_deref(), Some("66.7%"));
        assert_eq!(success.values[4], 100.0);

        assert!(processing_time_chart(&aggregate(&[]), &config).is_none());
    }

    #[test]
    fn test_write_dashboard_without_decisions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.html");
        let mut config = Config::default();
        config.chart.scale = 0.5;

        write_dashboard(&aggregate(&[]), &config, &path, fixed_time(), false).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert_eq!(html.matches("data:image/png;base64,iVBORw0KGgo").count(), 3);
        assert!(html.contains("<div class=\"chart-placeholder\"></div>"));
        assert!(html.contains("<div class=\"metric-value\">0</div>"));
        assert!(!html.contains("NaN"));
    }

    #[test]
    fn test_write_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("dashboard.html");
        let mut config = Config::default();
        config.chart.scale = 0.5;

        write_dashboard(&aggregate(&sample_values()), &config, &path, fixed_time(), false).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert_eq!(html.matches("data:image/png;base64,iVBORw0KGgo").count(), 4);
    }
}
