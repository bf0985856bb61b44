//! Transform helper for coordinate projection

use crate::data_types::{ChartLayout, Series};
use crate::error::EmptySeriesError;
use crate::geometry::{Bounds, Point};
use crate::scales::ChartScale;
use crate::view_controller::ViewController;
use chrono_tz::Tz;

/// Time and value scales of one render, plus the plot area they map into.
///
/// Scales produce plot-relative pixels; `bounds.origin` shifts them into
/// surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub bounds: Bounds,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, bounds: Bounds) -> Self {
        Self {
            x_scale,
            y_scale,
            bounds,
        }
    }

    /// Builds the scale pair for `series`: time domain `[first, last]` onto
    /// `[0, width]`, padded value domain onto `[height, 0]`.
    pub fn from_series(
        series: &Series,
        layout: &ChartLayout,
        tz: Tz,
    ) -> Result<Self, EmptySeriesError> {
        let (t_min, t_max) = series.time_bounds().ok_or(EmptySeriesError)?;
        let (v_min, v_max) = series.value_bounds().ok_or(EmptySeriesError)?;

        let bounds = layout.plot_bounds();
        let width = bounds.size.width;
        let height = bounds.size.height;

        let x_scale = ChartScale::new_time(ViewController::time_domain(t_min, t_max), (0.0, width), tz);
        let y_scale = ChartScale::new_linear(ViewController::value_domain(v_min, v_max), (height, 0.0));

        Ok(Self::new(x_scale, y_scale, bounds))
    }

    /// Data point (epoch ms, value) to surface coordinates.
    pub fn data_to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(self.x_data_to_screen(x), self.y_data_to_screen(y))
    }

    /// Surface coordinates back to (epoch ms, value).
    pub fn screen_to_data(&self, point: Point) -> (f64, f64) {
        (
            self.x_scale.invert(point.x - self.bounds.origin.x),
            self.y_scale.invert(point.y - self.bounds.origin.y),
        )
    }

    pub fn x_data_to_screen(&self, x: f64) -> f32 {
        self.bounds.origin.x + self.x_scale.map(x)
    }

    pub fn y_data_to_screen(&self, y: f64) -> f32 {
        self.bounds.origin.y + self.y_scale.map(y)
    }

    /// Plot-relative point, used for nodes positioned inside the plot.
    pub fn data_to_plot(&self, x: f64, y: f64) -> Point {
        Point::new(self.x_scale.map(x), self.y_scale.map(y))
    }
}
