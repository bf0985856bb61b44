// Plot types module

pub mod line;

pub use line::LinePlot;

use crate::data_types::Series;
use crate::scene::Scene;
use crate::transform::PlotTransform;

/// Trait for rendering plot types
pub trait PlotRenderer {
    /// Appends the plot's primitives to `scene`. Returns the number of
    /// vertices emitted.
    fn render(&self, scene: &mut Scene, transform: &PlotTransform, series: &Series) -> usize;
}
