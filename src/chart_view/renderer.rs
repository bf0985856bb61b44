use crate::geometry::{Bounds, Point};
use crate::rendering::RenderedChart;
use crate::scene::Scene;
use crate::transform::PlotTransform;

/// Identifies the event overlay of one specific render. Pointer events carry
/// the surface they were delivered to; once the chart redraws, surfaces of
/// earlier renders no longer match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventSurface {
    token: u64,
    bounds: Bounds,
}

impl EventSurface {
    pub(crate) fn new(token: u64, bounds: Bounds) -> Self {
        Self { token, bounds }
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    /// Overlay rectangle in surface coordinates.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(&point)
    }
}

/// What the current frame shows.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// Axes, path and an event surface.
    Chart {
        transform: PlotTransform,
        rendered: RenderedChart,
        surface: EventSurface,
    },
    /// Title and a status line only.
    Empty { status: String },
}

/// Everything one render produced. Replaced wholesale on every redraw.
#[derive(Clone, Debug)]
pub struct RenderState {
    pub scene: Scene,
    pub generation: u64,
    pub frame: Frame,
}

impl RenderState {
    pub fn surface(&self) -> Option<EventSurface> {
        match &self.frame {
            Frame::Chart { surface, .. } => Some(*surface),
            Frame::Empty { .. } => None,
        }
    }

    pub fn rendered(&self) -> Option<&RenderedChart> {
        match &self.frame {
            Frame::Chart { rendered, .. } => Some(rendered),
            Frame::Empty { .. } => None,
        }
    }

    pub fn transform(&self) -> Option<&PlotTransform> {
        match &self.frame {
            Frame::Chart { transform, .. } => Some(transform),
            Frame::Empty { .. } => None,
        }
    }

    pub fn status(&self) -> Option<&str> {
        match &self.frame {
            Frame::Chart { .. } => None,
            Frame::Empty { status } => Some(status),
        }
    }
}
