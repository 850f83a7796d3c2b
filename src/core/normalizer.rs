use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::axis::AxisSet;
use crate::core::series::{MissingValuePolicy, Series};
use crate::error::{RadarError, RadarResult};

/// Lowest scale maximum an auto-scaled chart uses, so small values don't
/// fill the whole chart.
pub const DEFAULT_SCALE_FLOOR: f64 = 10.0;

/// Shared scale maximum for every axis of every series.
///
/// Each series contributes one value per axis: its own value, or the
/// missing-value default. The result is `max(observed, floor)`, and is
/// `floor` when there is nothing to observe.
pub fn compute_scale_max(
    series: &[Series],
    axes: &AxisSet,
    floor: f64,
    missing: MissingValuePolicy,
) -> RadarResult<f64> {
    validate_floor(floor)?;
    Ok(observed_max(series, axes, missing).map_or(floor, |max| max.max(floor)))
}

/// Largest value any series resolves to on any axis.
#[must_use]
pub fn observed_max(series: &[Series], axes: &AxisSet, missing: MissingValuePolicy) -> Option<f64> {
    series
        .iter()
        .flat_map(|series| axes.iter().map(move |axis| series.value_for(axis, missing)))
        .max_by_key(|value| OrderedFloat(*value))
}

fn validate_floor(floor: f64) -> RadarResult<()> {
    if !floor.is_finite() || floor <= 0.0 {
        return Err(RadarError::InvalidInput(
            "scale floor must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// How a chart picks its scale maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ScaleMode {
    /// Observed maximum, never below `floor`.
    Auto { floor: f64 },
    /// Caller-chosen maximum; must cover every plotted value. No floor
    /// applies, so `Fixed { max: 5.0 }` really draws a 0..5 scale.
    Fixed { max: f64 },
}

impl Default for ScaleMode {
    fn default() -> Self {
        Self::Auto {
            floor: DEFAULT_SCALE_FLOOR,
        }
    }
}

impl ScaleMode {
    pub fn resolve(
        self,
        series: &[Series],
        axes: &AxisSet,
        missing: MissingValuePolicy,
    ) -> RadarResult<f64> {
        match self {
            Self::Auto { floor } => compute_scale_max(series, axes, floor, missing),
            Self::Fixed { max } => {
                if !max.is_finite() || max <= 0.0 {
                    return Err(RadarError::InvalidInput(
                        "fixed scale maximum must be finite and > 0".to_owned(),
                    ));
                }
                if let Some(observed) = observed_max(series, axes, missing) {
                    if observed > max {
                        return Err(RadarError::InvalidInput(format!(
                            "fixed scale maximum {max} is below observed value {observed}"
                        )));
                    }
                }
                Ok(max)
            }
        }
    }
}
