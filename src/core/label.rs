use serde::{Deserialize, Serialize};

use crate::core::geometry::{RadarGeometry, axis_angle, validate_radius};
use crate::error::RadarResult;

/// Label radius relative to the data radius (65 against 50 on the card).
pub const DEFAULT_LABEL_RADIUS_RATIO: f64 = 1.3;

/// Horizontal anchoring that keeps label text outside the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAlign {
    /// Text grows rightwards from the anchor (right half of the chart).
    Start,
    /// Text is centered on the anchor (top and bottom axes).
    Middle,
    /// Text grows leftwards from the anchor (left half of the chart).
    End,
}

/// Fixed-radius anchor point for one axis label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub axis_index: usize,
    pub x: f64,
    pub y: f64,
    pub align: LabelAlign,
}

// |cos| below this counts as a vertical axis.
const VERTICAL_AXIS_EPSILON: f64 = 1e-6;

fn align_for_angle(angle: f64) -> LabelAlign {
    let cos = angle.cos();
    if cos.abs() < VERTICAL_AXIS_EPSILON {
        LabelAlign::Middle
    } else if cos > 0.0 {
        LabelAlign::Start
    } else {
        LabelAlign::End
    }
}

impl RadarGeometry {
    pub fn label_anchor(
        self,
        axis_index: usize,
        axis_count: usize,
        label_radius: f64,
    ) -> RadarResult<LabelAnchor> {
        validate_radius(label_radius, "label radius")?;
        let angle = axis_angle(axis_index, axis_count)?;
        let point = self.point_at_distance(axis_index, axis_count, label_radius)?;
        Ok(LabelAnchor {
            axis_index,
            x: point.x,
            y: point.y,
            align: align_for_angle(angle),
        })
    }

    pub fn label_anchors(
        self,
        axis_count: usize,
        label_radius: f64,
    ) -> RadarResult<Vec<LabelAnchor>> {
        (0..axis_count)
            .map(|index| self.label_anchor(index, axis_count, label_radius))
            .collect()
    }
}

/// Label anchor for a chart centered at `(data_radius, data_radius)`.
///
/// The anchor sits on the same ray as the axis's data and grid points, at
/// `label_radius` from the center regardless of values.
pub fn compute_label_anchor(
    axis_index: usize,
    axis_count: usize,
    label_radius: f64,
    data_radius: f64,
) -> RadarResult<LabelAnchor> {
    RadarGeometry::inscribed(data_radius)?.label_anchor(axis_index, axis_count, label_radius)
}

/// One anchor per axis at `label_radius_ratio * data_radius`.
pub fn label_anchors(
    axis_count: usize,
    label_radius_ratio: f64,
    data_radius: f64,
) -> RadarResult<Vec<LabelAnchor>> {
    validate_radius(label_radius_ratio, "label radius ratio")?;
    RadarGeometry::inscribed(data_radius)?
        .label_anchors(axis_count, data_radius * label_radius_ratio)
}
