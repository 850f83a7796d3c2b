use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::axis::AxisSet;
use crate::core::series::{MissingValuePolicy, Series};
use crate::core::types::PlotPoint;
use crate::error::{RadarError, RadarResult};

/// Grid ring fractions of the scale maximum drawn behind the data.
pub const DEFAULT_RING_FRACTIONS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Angle of one axis in screen coordinates (y grows downwards).
///
/// Axis 0 points straight up (`-π/2`) and indices advance clockwise. Every
/// point this crate produces for an axis goes through this function, so data
/// points, grid rings, spokes and label anchors always share one ray.
/// A single-axis chart puts its only axis at the top.
pub fn axis_angle(axis_index: usize, axis_count: usize) -> RadarResult<f64> {
    if axis_count == 0 {
        return Err(RadarError::InvalidInput(
            "axis count must be >= 1".to_owned(),
        ));
    }
    if axis_index >= axis_count {
        return Err(RadarError::InvalidInput(format!(
            "axis index {axis_index} out of range for {axis_count} axes"
        )));
    }

    Ok(TAU * axis_index as f64 / axis_count as f64 - FRAC_PI_2)
}

fn polar_offset(center: PlotPoint, angle: f64, distance: f64) -> RadarResult<PlotPoint> {
    if !distance.is_finite() {
        return Err(RadarError::InvalidInput(format!(
            "projected distance {distance} overflows the drawing space"
        )));
    }
    let point = PlotPoint::new(
        center.x + distance * angle.cos(),
        center.y + distance * angle.sin(),
    );
    if !point.is_finite() {
        return Err(RadarError::InvalidInput(
            "projected point overflows the drawing space".to_owned(),
        ));
    }
    Ok(point)
}

/// Center and reference-circle radius of one chart in drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub center: PlotPoint,
    pub radius: f64,
}

impl RadarGeometry {
    pub fn new(center: PlotPoint, radius: f64) -> RadarResult<Self> {
        if !center.is_finite() {
            return Err(RadarError::InvalidInput(
                "chart center must be finite".to_owned(),
            ));
        }
        validate_radius(radius, "radius")?;
        Ok(Self { center, radius })
    }

    /// Geometry inscribed in a `2r x 2r` square anchored at the origin.
    pub fn inscribed(radius: f64) -> RadarResult<Self> {
        Self::new(PlotPoint::new(radius, radius), radius)
    }

    /// Projects one value onto its axis.
    ///
    /// Values are not clamped: `value > max_value` lands outside the
    /// reference circle and negative values land across the center.
    pub fn project(
        self,
        axis_index: usize,
        axis_count: usize,
        value: f64,
        max_value: f64,
    ) -> RadarResult<PlotPoint> {
        let angle = axis_angle(axis_index, axis_count)?;
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(RadarError::InvalidInput(
                "scale maximum must be finite and > 0".to_owned(),
            ));
        }
        if !value.is_finite() {
            return Err(RadarError::InvalidInput("value must be finite".to_owned()));
        }

        polar_offset(self.center, angle, self.radius * (value / max_value))
    }

    /// Point at a fixed distance from the center along an axis ray.
    pub fn point_at_distance(
        self,
        axis_index: usize,
        axis_count: usize,
        distance: f64,
    ) -> RadarResult<PlotPoint> {
        let angle = axis_angle(axis_index, axis_count)?;
        polar_offset(self.center, angle, distance)
    }

    pub fn polygon_path(
        self,
        series: &Series,
        axes: &AxisSet,
        max_value: f64,
        missing: MissingValuePolicy,
    ) -> RadarResult<Vec<PlotPoint>> {
        let axis_count = axes.len();
        axes.iter()
            .enumerate()
            .map(|(index, axis)| {
                self.project(index, axis_count, series.value_for(axis, missing), max_value)
            })
            .collect()
    }

    pub fn grid_ring(
        self,
        axis_count: usize,
        max_value: f64,
        fraction: f64,
    ) -> RadarResult<Vec<PlotPoint>> {
        validate_ring_fraction(fraction)?;
        let value = max_value * fraction;
        (0..axis_count)
            .map(|index| self.project(index, axis_count, value, max_value))
            .collect()
    }

    pub fn spokes(self, axis_count: usize, max_value: f64) -> RadarResult<Vec<Spoke>> {
        (0..axis_count)
            .map(|axis_index| {
                Ok(Spoke {
                    axis_index,
                    from: self.center,
                    to: self.project(axis_index, axis_count, max_value, max_value)?,
                })
            })
            .collect()
    }
}

/// Line from the chart center to one axis's reference-circle point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spoke {
    pub axis_index: usize,
    pub from: PlotPoint,
    pub to: PlotPoint,
}

pub(crate) fn validate_radius(radius: f64, field_name: &str) -> RadarResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(RadarError::InvalidInput(format!(
            "{field_name} must be finite and > 0"
        )));
    }
    Ok(())
}

pub(crate) fn validate_ring_fraction(fraction: f64) -> RadarResult<()> {
    if !fraction.is_finite() || fraction <= 0.0 {
        return Err(RadarError::InvalidInput(
            "ring fraction must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// Projects a value for a chart inscribed in a `2r x 2r` square, i.e.
/// centered at `(radius, radius)`.
pub fn project_point(
    axis_index: usize,
    axis_count: usize,
    value: f64,
    max_value: f64,
    radius: f64,
) -> RadarResult<PlotPoint> {
    RadarGeometry::inscribed(radius)?.project(axis_index, axis_count, value, max_value)
}

/// One projected point per axis, in axis order.
///
/// The path is open: callers close it by treating the list as cyclic.
pub fn build_polygon_path(
    series: &Series,
    axes: &AxisSet,
    max_value: f64,
    radius: f64,
    missing: MissingValuePolicy,
) -> RadarResult<Vec<PlotPoint>> {
    RadarGeometry::inscribed(radius)?.polygon_path(series, axes, max_value, missing)
}

/// Reference polygon at `fraction` of the scale maximum.
pub fn build_grid_ring(
    axis_count: usize,
    max_value: f64,
    radius: f64,
    fraction: f64,
) -> RadarResult<Vec<PlotPoint>> {
    RadarGeometry::inscribed(radius)?.grid_ring(axis_count, max_value, fraction)
}
