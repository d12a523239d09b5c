//! Text-only summary panels.

use super::svg::{Anchor, SvgWriter, TextStyle};
use super::ChartStyle;

const LINE_HEIGHT: f64 = 24.0;
const PANEL_PADDING: f64 = 24.0;

/// A titled, boxed block of text lines rendered as an image.
#[derive(Debug, Clone)]
pub struct TextPanel {
    pub title: String,
    pub lines: Vec<String>,
}

impl TextPanel {
    pub fn new(title: &str, lines: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            lines,
        }
    }

    /// Render the panel as an SVG document. The canvas grows to fit the text.
    pub fn to_svg(&self, style: &ChartStyle) -> String {
        let box_h = self.lines.len() as f64 * LINE_HEIGHT + PANEL_PADDING * 2.0;
        let height = style.height.max(box_h + 120.0);
        let width = style.width;

        let mut svg = SvgWriter::new(width, height, &style.font_family, &style.background);

        svg.text(
            width / 2.0,
            45.0,
            &self.title,
            &TextStyle {
                size: 24.0,
                bold: true,
                fill: &style.text_color,
                ..TextStyle::default()
            },
        );

        let box_w = width * 0.7;
        let box_x = (width - box_w) / 2.0;
        let box_y = 80.0 + (height - 80.0 - box_h) / 2.0;
        svg.rounded_rect(box_x, box_y, box_w, box_h, 12.0, "#f0f0f0", &style.grid_color);

        let text_x = box_x + PANEL_PADDING * 2.0;
        for (i, line) in self.lines.iter().enumerate() {
            let is_heading = line.ends_with(':') && !line.starts_with(' ');
            svg.text(
                text_x,
                box_y + PANEL_PADDING + LINE_HEIGHT * (i as f64 + 0.5),
                line,
                &TextStyle {
                    size: 16.0,
                    anchor: Anchor::Start,
                    middle: true,
                    bold: is_heading,
                    fill: &style.text_color,
                    ..TextStyle::default()
                },
            );
        }

        svg.finish()
    }
}
