//! Chart rendering.
//!
//! Charts are described as SVG documents and rasterized to PNG. The SVG
//! builders are pure functions of their input data and [`ChartStyle`], which
//! keeps them testable without touching the font database.

pub mod axis;
pub mod bar;
pub mod boxplot;
pub mod panel;
pub mod raster;
pub mod svg;

pub use bar::BarChart;
pub use boxplot::BoxPlot;
pub use panel::TextPanel;
pub use raster::Rasterizer;

use crate::config::ChartConfig;

/// Canvas and typography shared by every chart.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: f64,
    pub height: f64,
    pub font_family: String,
    pub background: String,
    pub text_color: String,
    pub axis_color: String,
    pub grid_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&ChartConfig::default())
    }
}

impl From<&ChartConfig> for ChartStyle {
    fn from(config: &ChartConfig) -> Self {
        Self {
            width: config.width as f64,
            height: config.height as f64,
            font_family: config.font_family.clone(),
            background: config.background.clone(),
            text_color: "#333333".to_string(),
            axis_color: "#555555".to_string(),
            grid_color: "#cccccc".to_string(),
        }
    }
}

/// Pixel bounds of the plotting area inside a chart canvas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub(crate) fn for_style(style: &ChartStyle) -> Self {
        Self {
            left: 80.0,
            right: style.width - 30.0,
            top: 60.0,
            bottom: style.height - 70.0,
        }
    }

    pub(crate) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(crate) fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub(crate) fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// Draw title, axis labels, axes and horizontal ticks for a value axis.
pub(crate) fn draw_frame(
    svg: &mut svg::SvgWriter,
    style: &ChartStyle,
    area: &PlotArea,
    axis: &axis::Axis,
    labels: (&str, &str, &str),
    grid: bool,
) {
    use svg::{Anchor, TextStyle};

    let (title, x_label, y_label) = labels;
    let width = svg.width();
    let height = svg.height();

    svg.text(
        width / 2.0,
        35.0,
        title,
        &TextStyle {
            size: 20.0,
            bold: true,
            fill: &style.text_color,
            ..TextStyle::default()
        },
    );

    for tick in axis.ticks() {
        let y = axis.project(tick, area.top, area.bottom);
        if grid {
            svg.line(area.left, y, area.right, y, &style.grid_color, 1.0, true);
        }
        svg.line(area.left - 5.0, y, area.left, y, &style.axis_color, 1.0, false);
        svg.text(
            area.left - 8.0,
            y,
            &axis.label(tick),
            &TextStyle {
                anchor: Anchor::End,
                middle: true,
                fill: &style.text_color,
                ..TextStyle::default()
            },
        );
    }

    svg.line(area.left, area.top, area.left, area.bottom, &style.axis_color, 1.0, false);
    svg.line(area.left, area.bottom, area.right, area.bottom, &style.axis_color, 1.0, false);

    svg.text(
        area.center_x(),
        height - 20.0,
        x_label,
        &TextStyle {
            size: 14.0,
            fill: &style.text_color,
            ..TextStyle::default()
        },
    );
    svg.text(
        24.0,
        area.center_y(),
        y_label,
        &TextStyle {
            size: 14.0,
            fill: &style.text_color,
            rotate: Some(-90.0),
            ..TextStyle::default()
        },
    );
}
