//! Report outputs: the HTML dashboard and the chart image directory.

pub mod dashboard;
pub mod summary;
pub mod visualize;

use crate::chart::svg::escape_xml;
use crate::models::Frequency;
use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};

/// Timestamp appended to default output names.
pub fn timestamp_suffix(now: DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

/// Category labels in canonical order.
pub fn frequency_labels() -> Vec<String> {
    Frequency::ALL.iter().map(|f| f.to_string()).collect()
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    escape_xml(text)
}

/// Progress bar over chart renders; hidden in quiet mode.
pub(crate) fn chart_progress(len: u64, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_suffix() {
        let now = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(timestamp_suffix(now), "20240102_030405");
    }

    #[test]
    fn test_frequency_labels() {
        assert_eq!(
            frequency_labels(),
            vec!["immediate", "continuous", "analysis", "optimization", "evolution"]
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
