//! Text summaries of aggregate statistics.
//!
//! Used for the summary image of the chart directory and for the console
//! summary printed by both tools.

use crate::analysis::AggregateResult;
use crate::models::Frequency;

/// Format a number the way it appears in the input: integers without a
/// fractional part, everything else as-is.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Lines restating every aggregate statistic.
pub fn summary_lines(result: &AggregateResult) -> Vec<String> {
    let mut lines = vec![
        format!("Total Decisions: {}", result.total()),
        format!(
            "Average Economic Value: {:.2}/100",
            result.avg_economic_value()
        ),
        format!(
            "Average Processing Time: {:.2} ms",
            result.avg_processing_ms()
        ),
        format!("Success Rate: {:.1}%", result.success_rate()),
        String::new(),
        "Frequency Distribution:".to_string(),
    ];

    for stats in &result.by_frequency {
        lines.push(format!(
            "  {}: {} ({:.1}%)",
            stats.frequency, stats.count, stats.percentage
        ));
    }

    lines.push(String::new());
    lines.push("Average Economic Value by Frequency:".to_string());
    for stats in result.by_frequency.iter().filter(|s| s.count > 0) {
        lines.push(format!(
            "  {}: {:.2}/100",
            stats.frequency, stats.avg_economic_value
        ));
    }

    if result.has_processing_data() {
        lines.push(String::new());
        lines.push("Average Processing Time by Frequency:".to_string());
        for stats in result.by_frequency.iter().filter(|s| s.timed > 0) {
            lines.push(format!(
                "  {}: {:.2} ms",
                stats.frequency, stats.avg_processing_ms
            ));
        }
    }

    lines.push(String::new());
    lines.push("Success Rate by Frequency:".to_string());
    for stats in result.by_frequency.iter().filter(|s| s.count > 0) {
        lines.push(format!(
            "  {}: {:.1}% ({}/{})",
            stats.frequency, stats.success_rate, stats.successes, stats.count
        ));
    }

    lines
}

/// Short console summary.
pub fn console_summary(result: &AggregateResult) -> String {
    let mut lines = vec![
        "📊 Analysis Summary:".to_string(),
        format!("   Decisions: {}", result.total()),
    ];
    if result.skipped > 0 {
        lines.push(format!("   Skipped entries: {}", result.skipped));
    }

    let distribution: Vec<String> = Frequency::ALL
        .iter()
        .map(|f| format!("{}: {}", f, result.stats(*f).count))
        .collect();
    lines.push(format!("   - {}", distribution.join(" | ")));
    lines.push(format!(
        "   Avg economic value: {:.1}/100 | Avg processing time: {:.1} ms | Success rate: {:.1}%",
        result.avg_economic_value(),
        result.avg_processing_ms(),
        result.success_rate()
    ));

    lines.join("\n")
}
