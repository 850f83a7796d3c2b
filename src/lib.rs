//! radar-rs: radar (spider) chart geometry.
//!
//! `core` holds the pure geometry: one angle formula shared by data points,
//! grid rings, spokes and label anchors, plus the shared scale normalizer.
//! `api` assembles a cached, serializable scene and `render` turns it into
//! backend-agnostic draw primitives.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RadarChart, RadarChartSpec, RadarScene};
pub use error::{RadarError, RadarResult};
