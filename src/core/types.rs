use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

/// Drawing space the chart is inscribed in, in SVG `viewBox` terms.
///
/// `min_x`/`min_y` may be negative: label anchors sit outside the data
/// radius, so a scene's box usually extends past the `2r x 2r` square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    #[serde(default)]
    pub min_x: f64,
    #[serde(default)]
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// View box anchored at the origin.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self::with_origin(0.0, 0.0, width, height)
    }

    #[must_use]
    pub const fn with_origin(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    /// Square box reaching `half_extent` from `center` in every direction.
    #[must_use]
    pub fn square_around(center: PlotPoint, half_extent: f64) -> Self {
        let side = half_extent * 2.0;
        Self::with_origin(center.x - half_extent, center.y - half_extent, side, side)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn validate(self) -> RadarResult<Self> {
        if !self.is_valid() {
            return Err(RadarError::InvalidViewBox {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.min_x + self.width
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.min_y + self.height
    }

    #[must_use]
    pub fn center(self) -> PlotPoint {
        PlotPoint::new(self.min_x + self.width / 2.0, self.min_y + self.height / 2.0)
    }

    /// Edges are inclusive.
    #[must_use]
    pub fn contains(self, point: PlotPoint) -> bool {
        (self.min_x..=self.max_x()).contains(&point.x)
            && (self.min_y..=self.max_y()).contains(&point.y)
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// One computed coordinate pair in drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
