use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::error::{RadarError, RadarResult};

/// Value substituted for an axis a series does not define.
///
/// The default is `1.0`: a missing stat reads as the lowest real level, not as
/// zero, so it never collapses onto the chart center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissingValuePolicy {
    pub default_value: f64,
}

pub const DEFAULT_MISSING_VALUE: f64 = 1.0;

impl Default for MissingValuePolicy {
    fn default() -> Self {
        Self {
            default_value: DEFAULT_MISSING_VALUE,
        }
    }
}

impl MissingValuePolicy {
    pub fn new(default_value: f64) -> RadarResult<Self> {
        Self { default_value }.validate()
    }

    pub fn validate(self) -> RadarResult<Self> {
        if !self.default_value.is_finite() {
            return Err(RadarError::InvalidInput(
                "missing-value default must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One polygon's worth of per-axis values, keyed by axis name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    values: IndexMap<String, f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: IndexMap::new(),
        }
    }

    pub fn from_pairs<I, S>(name: impl Into<String>, pairs: I) -> RadarResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut series = Self::new(name);
        for (axis, value) in pairs {
            series.set(axis, value)?;
        }
        Ok(series)
    }

    /// Sets or replaces the value for one axis.
    pub fn set(&mut self, axis: impl Into<String>, value: f64) -> RadarResult<()> {
        let axis = axis.into();
        if !value.is_finite() {
            return Err(RadarError::InvalidInput(format!(
                "series `{}` value for axis `{axis}` must be finite",
                self.name
            )));
        }
        self.values.insert(axis, value);
        Ok(())
    }

    pub fn with_value(mut self, axis: impl Into<String>, value: f64) -> RadarResult<Self> {
        self.set(axis, value)?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, axis: &str) -> Option<f64> {
        self.values.get(axis).copied()
    }

    #[must_use]
    pub fn value_for(&self, axis: &Axis, missing: MissingValuePolicy) -> f64 {
        self.get(&axis.name).unwrap_or(missing.default_value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(axis, value)| (axis.as_str(), *value))
    }
}
