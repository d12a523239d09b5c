//! Box plots of value distributions per category.

use super::axis::Axis;
use super::svg::{SvgWriter, TextStyle};
use super::{draw_frame, ChartStyle, PlotArea};
use crate::analysis::stats::BoxStats;

const MEDIAN_COLOR: &str = "#e67e22";
const OUTLINE_COLOR: &str = "#2c3e50";

/// One box per non-empty group, annotated with the group mean.
#[derive(Debug, Clone)]
pub struct BoxPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: String,
    groups: Vec<(String, BoxStats)>,
}

impl BoxPlot {
    /// Build a box plot; groups without values are dropped.
    pub fn new(title: &str, groups: Vec<(String, Vec<f64>)>) -> Self {
        let groups = groups
            .into_iter()
            .filter_map(|(label, values)| BoxStats::from_values(&values).map(|stats| (label, stats)))
            .collect();
        Self {
            title: title.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            color: "#3498db".to_string(),
            groups,
        }
    }

    pub fn axis_labels(mut self, x_label: &str, y_label: &str) -> Self {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    /// Groups that will be drawn, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn value_axis(&self) -> Axis {
        let lo = self
            .groups
            .iter()
            .map(|(_, s)| s.min)
            .fold(f64::INFINITY, f64::min);
        let hi = self
            .groups
            .iter()
            .map(|(_, s)| s.max)
            .fold(f64::NEG_INFINITY, f64::max);
        if !lo.is_finite() || !hi.is_finite() {
            return Axis::fit(0.0, 100.0);
        }
        // room below the lowest whisker for the mean annotations
        let pad = ((hi - lo) * 0.1).max(5.0);
        Axis::fit(lo - pad * 1.5, hi + pad * 0.5)
    }

    /// Render the chart as an SVG document.
    pub fn to_svg(&self, style: &ChartStyle) -> String {
        let mut svg = SvgWriter::new(style.width, style.height, &style.font_family, &style.background);
        let area = PlotArea::for_style(style);
        let axis = self.value_axis();

        draw_frame(
            &mut svg,
            style,
            &area,
            &axis,
            (self.title.as_str(), self.x_label.as_str(), self.y_label.as_str()),
            true,
        );

        let slot = area.width() / self.groups.len().max(1) as f64;
        let box_w = slot * 0.5;
        let y = |v: f64| axis.project(v, area.top, area.bottom);

        for (i, (label, stats)) in self.groups.iter().enumerate() {
            let cx = area.left + slot * (i as f64 + 0.5);
            let left = cx - box_w / 2.0;

            svg.line(cx, y(stats.whisker_high), cx, y(stats.q3), OUTLINE_COLOR, 1.0, false);
            svg.line(cx, y(stats.q1), cx, y(stats.whisker_low), OUTLINE_COLOR, 1.0, false);
            for cap in [stats.whisker_low, stats.whisker_high] {
                svg.line(cx - box_w / 4.0, y(cap), cx + box_w / 4.0, y(cap), OUTLINE_COLOR, 1.0, false);
            }

            svg.rect(
                left,
                y(stats.q3),
                box_w,
                y(stats.q1) - y(stats.q3),
                &self.color,
                Some((OUTLINE_COLOR, 1.0)),
            );
            svg.line(left, y(stats.median), left + box_w, y(stats.median), MEDIAN_COLOR, 2.0, false);

            for outlier in &stats.outliers {
                svg.circle(cx, y(*outlier), 3.5, OUTLINE_COLOR);
            }

            svg.text(
                cx,
                y(stats.min) + 18.0,
                &format!("Mean: {:.1}", stats.mean),
                &TextStyle {
                    bold: true,
                    fill: &style.text_color,
                    ..TextStyle::default()
                },
            );
            svg.text(
                cx,
                area.bottom + 22.0,
                label,
                &TextStyle {
                    size: 13.0,
                    fill: &style.text_color,
                    ..TextStyle::default()
                },
            );
        }

        svg.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_groups_are_dropped() {
        let plot = BoxPlot::new(
            "Economic Value",
            vec![
                ("immediate".to_string(), vec![80.0, 90.0]),
                ("continuous".to_string(), vec![]),
                ("evolution".to_string(), vec![40.0]),
            ],
        );
        assert_eq!(plot.labels(), vec!["immediate", "evolution"]);
        assert!(!plot.is_empty());
    }

    #[test]
    fn test_mean_annotations() {
        let plot = BoxPlot::new(
            "Economic Value",
            vec![
                ("immediate".to_string(), vec![80.0, 90.0, 95.0]),
                ("analysis".to_string(), vec![50.0]),
            ],
        )
        .axis_labels("Frequency", "Economic Value");
        let svg = plot.to_svg(&ChartStyle::default());

        assert!(svg.contains(">Mean: 88.3</text>"));
        assert!(svg.contains(">Mean: 50.0</text>"));
        assert!(svg.contains(">analysis</text>"));
        assert!(!svg.contains(">continuous</text>"));
    }

    #[test]
    fn test_axis_leaves_room_below_minimum() {
        let plot = BoxPlot::new("x", vec![("a".to_string(), vec![10.0, 20.0])]);
        let axis = plot.value_axis();
        assert!(axis.min < 10.0);
        assert!(axis.max >= 20.0);
    }

    #[test]
    fn test_no_groups() {
        let plot = BoxPlot::new("x", vec![("a".to_string(), vec![])]);
        assert!(plot.is_empty());
        assert!(plot.to_svg(&ChartStyle::default()).contains(">x</text>"));
    }
}
