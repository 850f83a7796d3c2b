use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::error::{RadarError, RadarResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels, e.g. `from_rgb8(0xf9, 0x73, 0x16)`.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn validate(self) -> RadarResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RadarError::InvalidInput(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_stroke_width(stroke_width: f64) -> RadarResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(RadarError::InvalidInput(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// Draw command for one line segment in view-box space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> RadarResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(RadarError::InvalidInput(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Draw command for one closed polygon. The last point connects back to the
/// first; it is not repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: Vec<PlotPoint>,
    pub stroke_width: f64,
    pub stroke: Color,
    pub fill: Option<Color>,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: Vec<PlotPoint>, stroke_width: f64, stroke: Color) -> Self {
        Self {
            points,
            stroke_width,
            stroke,
            fill: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.points.is_empty() {
            return Err(RadarError::InvalidInput(
                "polygon must have at least one point".to_owned(),
            ));
        }
        if !self.points.iter().all(|point| point.is_finite()) {
            return Err(RadarError::InvalidInput(
                "polygon coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.stroke.validate()?;
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in view-box space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> RadarResult<()> {
        if self.text.is_empty() {
            return Err(RadarError::InvalidInput(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(RadarError::InvalidInput(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(RadarError::InvalidInput(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
