use crate::core::ViewBox;
use crate::error::RadarResult;
use crate::render::{LinePrimitive, PolygonPrimitive, TextPrimitive};

/// Backend-agnostic scene for one radar draw pass.
///
/// Backends draw in field order: `rings` (grid), `lines` (spokes),
/// `polygons` (series data), then `texts`, so spokes never cover the data.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub view_box: ViewBox,
    pub rings: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(view_box: ViewBox) -> Self {
        Self {
            view_box,
            rings: Vec::new(),
            lines: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_ring(mut self, ring: PolygonPrimitive) -> Self {
        self.rings.push(ring);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> RadarResult<()> {
        self.view_box.validate()?;

        for ring in &self.rings {
            ring.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
            && self.polygons.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
    }
}
