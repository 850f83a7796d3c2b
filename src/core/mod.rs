pub mod axis;
pub mod dimension;
pub mod geometry;
pub mod label;
pub mod normalizer;
pub mod series;
pub mod types;

pub use axis::{Axis, AxisSet};
pub use dimension::{Dimension, DimensionStat, series_from_dimension_stats};
pub use geometry::{
    DEFAULT_RING_FRACTIONS, RadarGeometry, Spoke, axis_angle, build_grid_ring, build_polygon_path,
    project_point,
};
pub use label::{
    DEFAULT_LABEL_RADIUS_RATIO, LabelAlign, LabelAnchor, compute_label_anchor, label_anchors,
};
pub use normalizer::{DEFAULT_SCALE_FLOOR, ScaleMode, compute_scale_max, observed_max};
pub use series::{DEFAULT_MISSING_VALUE, MissingValuePolicy, Series};
pub use types::{PlotPoint, ViewBox};
