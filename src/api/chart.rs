use tracing::{debug, trace};

use crate::core::{ScaleMode, Series};
use crate::error::RadarResult;
use crate::render::{RadarStyle, Renderer};

use super::chart_spec::validate_series;
use super::{RadarChartSpec, RadarScene};

/// Radar chart owning its spec and the last scene built from it.
///
/// The scene is rebuilt lazily after any mutation; repeated `scene()` calls
/// on an unchanged chart return the cached value.
#[derive(Debug, Clone)]
pub struct RadarChart {
    spec: RadarChartSpec,
    scene: Option<RadarScene>,
}

impl RadarChart {
    pub fn new(spec: RadarChartSpec) -> RadarResult<Self> {
        spec.validate()?;
        Ok(Self { spec, scene: None })
    }

    #[must_use]
    pub fn spec(&self) -> &RadarChartSpec {
        &self.spec
    }

    #[must_use]
    pub fn has_cached_scene(&self) -> bool {
        self.scene.is_some()
    }

    pub fn scale_max(&self) -> RadarResult<f64> {
        self.spec.scale_max()
    }

    pub fn scene(&mut self) -> RadarResult<&RadarScene> {
        let scene = match self.scene.take() {
            Some(scene) => {
                trace!("radar scene cache hit");
                scene
            }
            None => {
                let scene = RadarScene::build(&self.spec)?;
                debug!(
                    axis_count = self.spec.axes.len(),
                    series_count = self.spec.series.len(),
                    scale_max = scene.scale_max,
                    "rebuilt radar scene"
                );
                scene
            }
        };
        let scene: &RadarScene = self.scene.insert(scene);
        Ok(scene)
    }

    /// Replaces all series. Rejects an empty list, duplicate names, or data
    /// above a fixed scale maximum.
    pub fn set_series(&mut self, series: Vec<Series>) -> RadarResult<()> {
        validate_series(&series)?;
        self.spec
            .scale
            .resolve(&series, &self.spec.axes, self.spec.missing_value)?;
        self.spec.series = series;
        self.invalidate();
        Ok(())
    }

    /// Replaces the series with the same name, or appends it.
    pub fn upsert_series(&mut self, series: Series) -> RadarResult<()> {
        let mut next = self.spec.series.clone();
        match next.iter_mut().find(|existing| existing.name == series.name) {
            Some(existing) => *existing = series,
            None => next.push(series),
        }
        self.set_series(next)
    }

    /// Removes a series by name. The last series cannot be removed.
    pub fn remove_series(&mut self, name: &str) -> bool {
        if self.spec.series.len() <= 1 {
            return false;
        }
        let before = self.spec.series.len();
        self.spec.series.retain(|series| series.name != name);
        let removed = self.spec.series.len() != before;
        if removed {
            self.invalidate();
        }
        removed
    }

    /// Changes the scale mode. A fixed maximum below the data is rejected
    /// and leaves the chart unchanged.
    pub fn set_scale_mode(&mut self, scale: ScaleMode) -> RadarResult<()> {
        scale.resolve(&self.spec.series, &self.spec.axes, self.spec.missing_value)?;
        self.spec.scale = scale;
        self.invalidate();
        Ok(())
    }

    /// Builds (or reuses) the scene and hands its frame to `renderer`.
    pub fn render<R: Renderer>(&mut self, renderer: &mut R, style: &RadarStyle) -> RadarResult<()> {
        let frame = self.scene()?.to_render_frame(style)?;
        renderer.render(&frame)
    }

    fn invalidate(&mut self) {
        self.scene = None;
    }
}
