//! SVG to PNG rasterization.

use crate::error::{ReportError, Result};
use tracing::debug;

/// Renders chart SVG documents to PNG bytes.
///
/// The system font database is loaded once on construction and shared by
/// every chart rendered through this instance.
pub struct Rasterizer {
    options: usvg::Options<'static>,
    scale: f32,
}

impl Rasterizer {
    /// Create a rasterizer using `font_family` as the default font and
    /// `scale` output pixels per SVG unit.
    pub fn new(font_family: &str, scale: f32) -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        options.font_family = font_family.to_string();
        debug!("Loaded {} font faces", options.fontdb.len());

        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };

        Self { options, scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Rasterize an SVG document. `name` identifies the chart in errors.
    pub fn render_png(&self, name: &str, svg: &str) -> Result<Vec<u8>> {
        let tree = usvg::Tree::from_str(svg, &self.options).map_err(|e| ReportError::Svg {
            chart: name.to_string(),
            reason: e.to_string(),
        })?;

        let size = tree.size();
        let width = (size.width() * self.scale).ceil().max(1.0) as u32;
        let height = (size.height() * self.scale).ceil().max(1.0) as u32;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| ReportError::Raster {
            chart: name.to_string(),
            reason: format!("cannot allocate a {}x{} pixmap", width, height),
        })?;

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(self.scale, self.scale),
            &mut pixmap.as_mut(),
        );

        debug!("Rasterized '{}' at {}x{}", name, width, height);

        pixmap.encode_png().map_err(|e| ReportError::Raster {
            chart: name.to_string(),
            reason: e.to_string(),
        })
    }
}
