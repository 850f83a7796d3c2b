use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

/// One named dimension around the chart, with its position in the layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axis {
    pub name: String,
    pub order: usize,
}

/// Ordered, non-empty list of uniquely named axes.
///
/// Axis order is the order supplied at construction and never depends on
/// series values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AxisSet {
    axes: Vec<Axis>,
}

impl AxisSet {
    pub fn new<I, S>(names: I) -> RadarResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = IndexSet::new();
        let mut axes = Vec::new();
        for (order, name) in names.into_iter().enumerate() {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(RadarError::InvalidInput(format!(
                    "axis name at index {order} must not be empty"
                )));
            }
            if !seen.insert(name.clone()) {
                return Err(RadarError::InvalidInput(format!(
                    "duplicate axis name `{name}`"
                )));
            }
            axes.push(Axis { name, order });
        }

        if axes.is_empty() {
            return Err(RadarError::InvalidInput(
                "a radar chart needs at least one axis".to_owned(),
            ));
        }

        Ok(Self { axes })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Always `false`; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Axis> {
        self.axes.get(index)
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.axes.iter().position(|axis| axis.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|axis| axis.name.as_str())
    }
}

impl TryFrom<Vec<String>> for AxisSet {
    type Error = RadarError;

    fn try_from(names: Vec<String>) -> RadarResult<Self> {
        Self::new(names)
    }
}

impl From<AxisSet> for Vec<String> {
    fn from(set: AxisSet) -> Self {
        set.axes.into_iter().map(|axis| axis.name).collect()
    }
}
