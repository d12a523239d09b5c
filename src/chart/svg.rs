//! Minimal SVG document builder.

use std::fmt::Write as _;

/// Escape text for use in XML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Horizontal anchoring of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Styling for a text element.
#[derive(Debug, Clone)]
pub struct TextStyle<'a> {
    pub size: f64,
    pub anchor: Anchor,
    pub fill: &'a str,
    pub bold: bool,
    /// Rotation in degrees around the text origin.
    pub rotate: Option<f64>,
    /// Vertically centre the text on `y` instead of using `y` as baseline.
    pub middle: bool,
}

impl Default for TextStyle<'_> {
    fn default() -> Self {
        Self {
            size: 12.0,
            anchor: Anchor::Middle,
            fill: "#333333",
            bold: false,
            rotate: None,
            middle: false,
        }
    }
}

/// Accumulates SVG elements into a standalone document.
pub struct SvgWriter {
    width: f64,
    height: f64,
    font_family: String,
    body: String,
}

impl SvgWriter {
    /// Start a document of the given size filled with `background`.
    pub fn new(width: f64, height: f64, font_family: &str, background: &str) -> Self {
        let mut writer = Self {
            width,
            height,
            font_family: escape_xml(font_family),
            body: String::new(),
        };
        writer.rect(0.0, 0.0, width, height, background, None);
        writer
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Axis-aligned rectangle with an optional `(color, width)` stroke.
    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: Option<(&str, f64)>) {
        let _ = write!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}""#,
            x,
            y,
            w.max(0.0),
            h.max(0.0),
            fill
        );
        if let Some((color, width)) = stroke {
            let _ = write!(self.body, r#" stroke="{}" stroke-width="{:.2}""#, color, width);
        }
        self.body.push_str("/>\n");
    }

    /// Rectangle with rounded corners.
    pub fn rounded_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, fill: &str, stroke: &str) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            x,
            y,
            w.max(0.0),
            h.max(0.0),
            radius,
            fill,
            stroke
        );
    }

    /// Straight line; `dashed` draws a `4 3` dash pattern.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64, dashed: bool) {
        let _ = write!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}""#,
            x1, y1, x2, y2, stroke, width
        );
        if dashed {
            self.body.push_str(r#" stroke-dasharray="4 3""#);
        }
        self.body.push_str("/>\n");
    }

    /// Circle outline.
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, stroke: &str) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}" stroke-width="1"/>"#,
            cx, cy, r, stroke
        );
    }

    /// Single line of text; the content is escaped.
    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle<'_>) {
        let _ = write!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{:.1}" fill="{}" text-anchor="{}""#,
            x,
            y,
            self.font_family,
            style.size,
            style.fill,
            style.anchor.as_str()
        );
        if style.bold {
            self.body.push_str(r#" font-weight="bold""#);
        }
        if style.middle {
            self.body.push_str(r#" dominant-baseline="central""#);
        }
        if let Some(angle) = style.rotate {
            let _ = write!(self.body, r#" transform="rotate({:.1} {:.2} {:.2})""#, angle, x, y);
        }
        let _ = writeln!(
            self.body,
            r#" xml:space="preserve">{}</text>"#,
            escape_xml(content)
        );
    }

    /// Finish the document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_document_structure() {
        let mut svg = SvgWriter::new(200.0, 100.0, "Arial", "white");
        svg.line(0.0, 0.0, 10.0, 10.0, "#000", 1.0, true);
        svg.text(5.0, 5.0, "A < B", &TextStyle::default());
        let doc = svg.finish();

        assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"100\""));
        assert!(doc.contains("stroke-dasharray"));
        assert!(doc.contains("A &lt; B</text>"));
        assert!(doc.trim_end().ends_with("</svg>"));
    }
}
