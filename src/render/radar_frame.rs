use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::api::RadarScene;
use crate::core::{LabelAlign, PlotPoint};
use crate::error::RadarResult;
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

/// Colors and stroke widths for a radar frame.
///
/// Defaults follow the character card: gray grid, orange data polygon with
/// a half-transparent fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarStyle {
    pub grid_color: Color,
    pub grid_stroke_width: f64,
    pub data_stroke_color: Color,
    pub data_fill_color: Color,
    pub data_stroke_width: f64,
    pub label_color: Color,
    pub label_font_size: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        let orange = Color::from_rgb8(0xf9, 0x73, 0x16);
        Self {
            grid_color: Color::from_rgb8(0x37, 0x41, 0x51),
            grid_stroke_width: 0.5,
            data_stroke_color: orange,
            data_fill_color: orange.with_alpha(0.5),
            data_stroke_width: 2.0,
            label_color: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            label_font_size: 6.0,
        }
    }
}

impl From<LabelAlign> for TextHAlign {
    fn from(align: LabelAlign) -> Self {
        match align {
            LabelAlign::Start => Self::Left,
            LabelAlign::Middle => Self::Center,
            LabelAlign::End => Self::Right,
        }
    }
}

impl RadarScene {
    /// Materializes rings, spokes, data polygons and labels as draw commands.
    pub fn to_render_frame(&self, style: &RadarStyle) -> RadarResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.view_box);

        for ring in &self.rings {
            frame = frame.with_ring(PolygonPrimitive::new(
                ring.points.clone(),
                style.grid_stroke_width,
                style.grid_color,
            ));
        }

        for spoke in &self.spokes {
            frame = frame.with_line(LinePrimitive::new(
                spoke.from.x,
                spoke.from.y,
                spoke.to.x,
                spoke.to.y,
                style.grid_stroke_width,
                style.grid_color,
            ));
        }

        for polygon in &self.polygons {
            frame = frame.with_polygon(
                PolygonPrimitive::new(
                    polygon.points.clone(),
                    style.data_stroke_width,
                    style.data_stroke_color,
                )
                .with_fill(style.data_fill_color),
            );
        }

        for label in &self.labels {
            frame = frame.with_text(TextPrimitive::new(
                label.axis.clone(),
                label.anchor.x,
                label.anchor.y,
                style.label_font_size,
                style.label_color,
                label.anchor.align.into(),
            ));
        }

        frame.validate()?;
        Ok(frame)
    }
}

/// Formats points as the `x,y x,y ...` list an SVG `points` attribute takes.
#[must_use]
pub fn points_attribute(points: &[PlotPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (index, point) in points.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", point.x, point.y);
    }
    out
}
