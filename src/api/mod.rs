mod chart;
mod chart_spec;
mod json_contract;
mod scene;

pub use chart::RadarChart;
pub use chart_spec::{DEFAULT_RADIUS, LEVELS_SERIES_NAME, RadarChartSpec};
pub use json_contract::{RADAR_SCENE_JSON_SCHEMA_V1, RadarSceneJsonContractV1};
pub use scene::{AxisLabel, GridRing, RadarScene, SeriesPolygon};
