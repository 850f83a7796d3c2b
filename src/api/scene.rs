use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::geometry::validate_radius;
use crate::core::{LabelAnchor, PlotPoint, RadarGeometry, Spoke, ViewBox};
use crate::error::{RadarError, RadarResult};

use super::RadarChartSpec;

/// Reference polygon drawn at a fraction of the scale maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRing {
    pub fraction: f64,
    pub value: f64,
    pub points: Vec<PlotPoint>,
}

/// Data polygon for one series, one point per axis in axis order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPolygon {
    pub series: String,
    pub points: Vec<PlotPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub axis: String,
    pub anchor: LabelAnchor,
}

/// Fully computed chart geometry, ready for any rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarScene {
    pub view_box: ViewBox,
    pub center: PlotPoint,
    pub radius: f64,
    pub scale_max: f64,
    pub rings: Vec<GridRing>,
    pub spokes: Vec<Spoke>,
    pub polygons: Vec<SeriesPolygon>,
    pub labels: Vec<AxisLabel>,
}

impl RadarScene {
    /// Builds every ring, spoke, polygon and label from one geometry, so all
    /// of them share the same axis rays.
    pub fn build(spec: &RadarChartSpec) -> RadarResult<Self> {
        spec.validate()?;
        warn_on_unknown_axes(spec);

        let geometry = RadarGeometry::inscribed(spec.radius)?;
        let axis_count = spec.axes.len();
        let scale_max = spec.scale_max()?;

        let rings = spec
            .resolved_ring_fractions()?
            .into_iter()
            .map(|fraction| {
                Ok(GridRing {
                    fraction,
                    value: scale_max * fraction,
                    points: geometry.grid_ring(axis_count, scale_max, fraction)?,
                })
            })
            .collect::<RadarResult<Vec<_>>>()?;

        let polygons = spec
            .series
            .iter()
            .map(|series| {
                Ok(SeriesPolygon {
                    series: series.name.clone(),
                    points: geometry.polygon_path(
                        series,
                        &spec.axes,
                        scale_max,
                        spec.missing_value,
                    )?,
                })
            })
            .collect::<RadarResult<Vec<_>>>()?;

        let labels = geometry
            .label_anchors(axis_count, spec.label_radius())?
            .into_iter()
            .zip(spec.axes.names())
            .map(|(anchor, axis)| AxisLabel {
                axis: axis.to_owned(),
                anchor,
            })
            .collect();

        Ok(Self {
            view_box: ViewBox::square_around(
                geometry.center,
                spec.radius.max(spec.label_radius()),
            ),
            center: geometry.center,
            radius: spec.radius,
            scale_max,
            rings,
            spokes: geometry.spokes(axis_count, scale_max)?,
            polygons,
            labels,
        })
    }

    /// Checks a scene that did not come from [`RadarScene::build`], e.g. one
    /// parsed from JSON.
    pub fn validate(&self) -> RadarResult<()> {
        self.view_box.validate()?;
        validate_radius(self.radius, "scene radius")?;
        validate_radius(self.scale_max, "scene scale maximum")?;
        if !self.center.is_finite() {
            return Err(RadarError::InvalidInput(
                "scene center must be finite".to_owned(),
            ));
        }

        let axis_count = self.axis_count();
        if axis_count == 0 {
            return Err(RadarError::InvalidInput(
                "scene needs at least one spoke".to_owned(),
            ));
        }
        if self.labels.len() != axis_count {
            return Err(RadarError::InvalidInput(format!(
                "scene has {} labels for {axis_count} axes",
                self.labels.len()
            )));
        }
        if self.polygons.is_empty() {
            return Err(RadarError::InvalidInput(
                "scene needs at least one series polygon".to_owned(),
            ));
        }

        for spoke in &self.spokes {
            check_points("spoke", &[spoke.from, spoke.to], 2)?;
        }
        for ring in &self.rings {
            check_points("grid ring", &ring.points, axis_count)?;
        }
        for polygon in &self.polygons {
            check_points(&polygon.series, &polygon.points, axis_count)?;
        }
        for label in &self.labels {
            let anchor = PlotPoint::new(label.anchor.x, label.anchor.y);
            check_points(&label.axis, &[anchor], 1)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn polygon(&self, series: &str) -> Option<&SeriesPolygon> {
        self.polygons.iter().find(|polygon| polygon.series == series)
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.spokes.len()
    }
}

fn warn_on_unknown_axes(spec: &RadarChartSpec) {
    for series in &spec.series {
        for (axis, _) in series.iter() {
            if spec.axes.position(axis).is_none() {
                warn!(
                    series = %series.name,
                    axis,
                    "series value for unknown axis is not plotted"
                );
            }
        }
    }
}

fn check_points(owner: &str, points: &[PlotPoint], expected: usize) -> RadarResult<()> {
    if points.len() != expected {
        return Err(RadarError::InvalidInput(format!(
            "`{owner}` has {} points, expected {expected}",
            points.len()
        )));
    }
    if points.iter().any(|point| !point.is_finite()) {
        return Err(RadarError::InvalidInput(format!(
            "`{owner}` points must be finite"
        )));
    }
    Ok(())
}
