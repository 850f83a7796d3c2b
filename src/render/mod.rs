mod frame;
mod null_renderer;
mod primitives;
mod radar_frame;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, PolygonPrimitive, TextHAlign, TextPrimitive};
pub use radar_frame::{RadarStyle, points_attribute};

use crate::error::RadarResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code
/// never touches chart geometry.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RadarResult<()>;
}
