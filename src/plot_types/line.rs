use super::PlotRenderer;
use crate::data_types::{LinePlotConfig, Series};
use crate::scene::{Primitive, Role, Scene, Stroke};
use crate::transform::PlotTransform;

/// Line plot type
pub struct LinePlot {
    pub config: LinePlotConfig,
}

impl LinePlot {
    pub fn new(config: LinePlotConfig) -> Self {
        Self { config }
    }
}

impl PlotRenderer for LinePlot {
    /// One vertex per sample, in series order. Nothing is drawn for fewer
    /// than two samples since there is no segment to stroke.
    fn render(&self, scene: &mut Scene, transform: &PlotTransform, series: &Series) -> usize {
        if series.len() < 2 {
            return 0;
        }

        let points: Vec<_> = series
            .samples()
            .iter()
            .map(|s| transform.data_to_screen(s.time_ms(), s.value))
            .collect();
        let count = points.len();

        scene.push(
            Role::SeriesPath,
            Primitive::Polyline {
                points,
                stroke: Stroke {
                    color: self.config.color,
                    width: self.config.line_width,
                },
            },
        );
        count
    }
}
