//! Vertical bar charts.

use super::axis::Axis;
use super::svg::{Anchor, SvgWriter, TextStyle};
use super::{draw_frame, ChartStyle, PlotArea};

/// A single-series bar chart with optional per-bar annotations.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub color: String,
    /// Fixed value range; bars outside it are clamped.
    pub y_range: Option<(f64, f64)>,
    /// Label drawn above each bar.
    pub top_labels: Vec<Option<String>>,
    /// Label drawn inside each bar, in white.
    pub inner_labels: Vec<Option<String>>,
    pub legend: Option<String>,
    /// Fraction of each category slot covered by its bar.
    pub bar_width: f64,
    pub grid: bool,
}

impl BarChart {
    pub fn new(title: &str, categories: Vec<String>, values: Vec<f64>) -> Self {
        let len = values.len();
        Self {
            title: title.to_string(),
            x_label: String::new(),
            y_label: String::new(),
            categories,
            values,
            color: "#3498db".to_string(),
            y_range: None,
            top_labels: vec![None; len],
            inner_labels: vec![None; len],
            legend: None,
            bar_width: 0.8,
            grid: false,
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

    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    pub fn top_labels(mut self, labels: Vec<Option<String>>) -> Self {
        self.top_labels = labels;
        self
    }

    pub fn inner_labels(mut self, labels: Vec<Option<String>>) -> Self {
        self.inner_labels = labels;
        self
    }

    pub fn legend(mut self, label: &str) -> Self {
        self.legend = Some(label.to_string());
        self
    }

    pub fn bar_width(mut self, fraction: f64) -> Self {
        self.bar_width = fraction.clamp(0.05, 1.0);
        self
    }

    pub fn grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    fn value_axis(&self) -> Axis {
        match self.y_range {
            Some((min, max)) => Axis::fixed(min, max),
            None => {
                let max = self
                    .values
                    .iter()
                    .copied()
                    .filter(|v| v.is_finite())
                    .fold(0.0_f64, f64::max);
                // headroom for the labels above the tallest bar
                Axis::fit(0.0, if max > 0.0 { max * 1.15 } else { 1.0 })
            }
        }
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
            self.grid,
        );

        let slots = self.values.len().max(1) as f64;
        let slot = area.width() / slots;
        let bar_w = slot * self.bar_width;

        for (i, value) in self.values.iter().enumerate() {
            let cx = area.left + slot * (i as f64 + 0.5);
            let value = if value.is_finite() { *value } else { 0.0 };
            let y = axis.project(axis.clamp(value), area.top, area.bottom);
            let bar_h = area.bottom - y;

            svg.rect(cx - bar_w / 2.0, y, bar_w, bar_h, &self.color, None);

            if let Some(Some(label)) = self.top_labels.get(i) {
                svg.text(
                    cx,
                    y - 6.0,
                    label,
                    &TextStyle {
                        fill: &style.text_color,
                        ..TextStyle::default()
                    },
                );
            }

            if let Some(Some(label)) = self.inner_labels.get(i) {
                if bar_h >= 18.0 {
                    svg.text(
                        cx,
                        y + bar_h / 2.0,
                        label,
                        &TextStyle {
                            fill: "#ffffff",
                            bold: true,
                            middle: true,
                            ..TextStyle::default()
                        },
                    );
                }
            }

            if let Some(category) = self.categories.get(i) {
                svg.text(
                    cx,
                    area.bottom + 22.0,
                    category,
                    &TextStyle {
                        size: 13.0,
                        fill: &style.text_color,
                        ..TextStyle::default()
                    },
                );
            }
        }

        if let Some(legend) = &self.legend {
            let x = area.right - 130.0;
            let y = area.top + 10.0;
            svg.rect(x - 8.0, y - 6.0, 130.0, 28.0, "#ffffff", Some((style.grid_color.as_str(), 1.0)));
            svg.rect(x, y, 16.0, 16.0, &self.color, None);
            svg.text(
                x + 24.0,
                y + 8.0,
                legend,
                &TextStyle {
                    anchor: Anchor::Start,
                    middle: true,
                    fill: &style.text_color,
                    ..TextStyle::default()
                },
            );
        }

        svg.finish()
    }
}
