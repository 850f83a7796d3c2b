use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::axis::AxisSet;
use crate::core::series::Series;
use crate::error::{RadarError, RadarResult};

/// The eight character dimensions shown on the character card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Intellectual,
    Physical,
    Financial,
    Environmental,
    Vocational,
    Social,
    Emotional,
    Spiritual,
}

impl Dimension {
    /// Card layout order, clockwise from the top.
    pub const ALL: [Self; 8] = [
        Self::Intellectual,
        Self::Physical,
        Self::Financial,
        Self::Environmental,
        Self::Vocational,
        Self::Social,
        Self::Emotional,
        Self::Spiritual,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intellectual => "intellectual",
            Self::Physical => "physical",
            Self::Financial => "financial",
            Self::Environmental => "environmental",
            Self::Vocational => "vocational",
            Self::Social => "social",
            Self::Emotional => "emotional",
            Self::Spiritual => "spiritual",
        }
    }

    /// Axis set with all dimensions in card order.
    pub fn axis_set() -> RadarResult<AxisSet> {
        AxisSet::new(Self::ALL.iter().map(|dimension| dimension.as_str()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = RadarError;

    fn from_str(s: &str) -> RadarResult<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == normalized)
            .ok_or_else(|| RadarError::InvalidInput(format!("unknown dimension `{s}`")))
    }
}

/// Per-dimension level as reported by the profile endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionStat {
    pub dimension: Dimension,
    pub level: f64,
}

impl DimensionStat {
    #[must_use]
    pub const fn new(dimension: Dimension, level: f64) -> Self {
        Self { dimension, level }
    }
}

/// Builds a series from profile stats.
///
/// A dimension reported more than once keeps its last level. Dimensions that
/// are absent stay undefined and resolve through the missing-value policy.
pub fn series_from_dimension_stats(
    name: impl Into<String>,
    stats: &[DimensionStat],
) -> RadarResult<Series> {
    Series::from_pairs(
        name,
        stats.iter().map(|stat| (stat.dimension.as_str(), stat.level)),
    )
}
