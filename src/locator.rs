//! Nearest-sample hit testing for pointer positions.

use crate::data_types::{Sample, Series};
use crate::geometry::Point;
use crate::transform::PlotTransform;

/// The sample closest in time to a pointer, with its position in the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Located {
    pub index: usize,
    pub sample: Sample,
    /// Plot-relative pixel position of the sample.
    pub position: Point,
}

/// Finds the sample whose timestamp is closest to the instant under
/// `pointer_x` (plot-relative pixels).
///
/// Bisects for the insertion point of the target instant, clamps it into
/// `[1, n - 1]` and compares the two neighbours; the later one wins only when
/// strictly closer, so an equidistant pointer resolves to the earlier sample.
/// Pointers left of the first sample resolve to it, right of the last to the
/// last.
pub fn locate(series: &Series, transform: &PlotTransform, pointer_x: f32) -> Option<Located> {
    let index = nearest_index(series.samples(), transform.x_scale.invert(pointer_x))?;
    let sample = series.samples()[index];
    Some(Located {
        index,
        sample,
        position: transform.data_to_plot(sample.time_ms(), sample.value),
    })
}

/// Index of the sample nearest to `target_ms`, `None` for an empty slice.
pub fn nearest_index(samples: &[Sample], target_ms: f64) -> Option<usize> {
    match samples.len() {
        0 => None,
        1 => Some(0),
        n => {
            let i = samples
                .partition_point(|s| s.time_ms() < target_ms)
                .clamp(1, n - 1);
            let before = target_ms - samples[i - 1].time_ms();
            let after = samples[i].time_ms() - target_ms;
            Some(if before > after { i } else { i - 1 })
        }
    }
}
