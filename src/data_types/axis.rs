use crate::geometry::{Bounds, Point, Size};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AxisFormat {
    /// Epoch milliseconds rendered as calendar dates.
    Time,
    /// Values rendered as USD amounts.
    Currency,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisEdge {
    Left,
    Bottom,
}

impl AxisEdge {
    pub fn format(&self) -> AxisFormat {
        match self {
            Self::Left => AxisFormat::Currency,
            Self::Bottom => AxisFormat::Time,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 30.0,
            bottom: 50.0,
            left: 60.0,
        }
    }
}

/// Outer surface size and the margins reserved for axes, title and captions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub margin: Margins,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin: Margins::default(),
        }
    }
}

impl ChartLayout {
    pub fn surface_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Plot area size; never negative even when margins exceed the surface.
    pub fn plot_size(&self) -> Size {
        Size::new(
            (self.width - self.margin.left - self.margin.right).max(0.0),
            (self.height - self.margin.top - self.margin.bottom).max(0.0),
        )
    }

    /// Plot area in surface coordinates.
    pub fn plot_bounds(&self) -> Bounds {
        Bounds::new(
            Point::new(self.margin.left, self.margin.top),
            self.plot_size(),
        )
    }
}
