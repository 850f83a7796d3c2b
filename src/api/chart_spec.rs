use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::geometry::{validate_radius, validate_ring_fraction};
use crate::core::{
    AxisSet, DEFAULT_LABEL_RADIUS_RATIO, DEFAULT_RING_FRACTIONS, Dimension, DimensionStat,
    MissingValuePolicy, ScaleMode, Series, series_from_dimension_stats,
};
use crate::error::{RadarError, RadarResult};

/// Data radius of the character card: the data circle spans 100x100.
pub const DEFAULT_RADIUS: f64 = 50.0;

/// Series name used for a character's own levels.
pub const LEVELS_SERIES_NAME: &str = "levels";

/// Full input for one radar chart.
///
/// Serializable so hosts can persist or ship chart setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChartSpec {
    pub axes: AxisSet,
    pub series: Vec<Series>,
    #[serde(default)]
    pub scale: ScaleMode,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default = "default_label_radius_ratio")]
    pub label_radius_ratio: f64,
    #[serde(default = "default_ring_fractions")]
    pub ring_fractions: Vec<f64>,
    #[serde(default)]
    pub missing_value: MissingValuePolicy,
}

impl RadarChartSpec {
    /// Creates a spec with card defaults: auto scale (floor 10), radius 50,
    /// labels at 1.3x, rings every 20%.
    #[must_use]
    pub fn new(axes: AxisSet, series: Vec<Series>) -> Self {
        Self {
            axes,
            series,
            scale: ScaleMode::default(),
            radius: default_radius(),
            label_radius_ratio: default_label_radius_ratio(),
            ring_fractions: default_ring_fractions(),
            missing_value: MissingValuePolicy::default(),
        }
    }

    /// Character-card chart: the eight dimensions in card order with one
    /// `levels` series.
    pub fn for_dimension_stats(stats: &[DimensionStat]) -> RadarResult<Self> {
        let axes = Dimension::axis_set()?;
        let levels = series_from_dimension_stats(LEVELS_SERIES_NAME, stats)?;
        Ok(Self::new(axes, vec![levels]))
    }

    #[must_use]
    pub fn with_scale(mut self, scale: ScaleMode) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_label_radius_ratio(mut self, ratio: f64) -> Self {
        self.label_radius_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_ring_fractions(mut self, fractions: Vec<f64>) -> Self {
        self.ring_fractions = fractions;
        self
    }

    #[must_use]
    pub fn with_missing_value(mut self, missing_value: MissingValuePolicy) -> Self {
        self.missing_value = missing_value;
        self
    }

    pub fn validate(&self) -> RadarResult<()> {
        validate_radius(self.radius, "radius")?;
        validate_radius(self.label_radius_ratio, "label radius ratio")?;
        self.missing_value.validate()?;
        validate_series(&self.series)?;
        self.resolved_ring_fractions()?;
        self.scale_max()?;
        Ok(())
    }

    /// Ring fractions sorted ascending with duplicates removed.
    pub fn resolved_ring_fractions(&self) -> RadarResult<SmallVec<[f64; 8]>> {
        let mut fractions = SmallVec::<[f64; 8]>::new();
        for fraction in &self.ring_fractions {
            validate_ring_fraction(*fraction)?;
            fractions.push(*fraction);
        }
        fractions.sort_by(f64::total_cmp);
        fractions.dedup();
        Ok(fractions)
    }

    #[must_use]
    pub fn label_radius(&self) -> f64 {
        self.radius * self.label_radius_ratio
    }

    /// Resolves the shared scale maximum for the current series.
    pub fn scale_max(&self) -> RadarResult<f64> {
        self.scale.resolve(&self.series, &self.axes, self.missing_value)
    }

    /// Serializes the spec to pretty JSON.
    pub fn to_json_pretty(&self) -> RadarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RadarError::Serialization(format!("failed to serialize chart spec: {e}")))
    }

    /// Parses and validates a spec from JSON.
    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        let spec: Self = serde_json::from_str(input)
            .map_err(|e| RadarError::Serialization(format!("failed to parse chart spec: {e}")))?;
        spec.validate()?;
        Ok(spec)
    }
}

pub(crate) fn validate_series(series: &[Series]) -> RadarResult<()> {
    if series.is_empty() {
        return Err(RadarError::InvalidInput(
            "a radar chart needs at least one series".to_owned(),
        ));
    }
    let mut names = IndexSet::new();
    for entry in series {
        if !names.insert(entry.name.as_str()) {
            return Err(RadarError::InvalidInput(format!(
                "duplicate series name `{}`",
                entry.name
            )));
        }
        if let Some((axis, _)) = entry.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RadarError::InvalidInput(format!(
                "series `{}` value for axis `{axis}` must be finite",
                entry.name
            )));
        }
    }
    Ok(())
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

fn default_label_radius_ratio() -> f64 {
    DEFAULT_LABEL_RADIUS_RATIO
}

fn default_ring_fractions() -> Vec<f64> {
    DEFAULT_RING_FRACTIONS.to_vec()
}
