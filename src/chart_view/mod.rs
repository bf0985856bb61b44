//! Redraw lifecycle of a single price chart.
//!
//! [`ChartView`] owns the current series, at most one [`RenderState`] and at
//! most one [`InteractionController`]. Every redraw tears both down before
//! building new ones, so nothing from an earlier render survives into the
//! next.

pub mod handle;
pub mod input;
pub mod renderer;

use crate::config::ChartConfig;
use crate::data_types::{RawSample, Series, ViewConfig};
use crate::error::{ChartError, FetchError, ParseError};
use crate::geometry::Point;
use crate::normalize::normalize;
use crate::rendering::{render_chart, render_empty_frame};
use crate::scene::{Primitive, Scene};
use crate::transform::PlotTransform;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use handle::ChartHandle;
pub use input::{HoverState, InteractionController, PointerTracker};
pub use renderer::{EventSurface, Frame, RenderState};

pub const STATUS_LOADING: &str = "Loading...";
pub const STATUS_NO_DATA: &str = "No data available";
pub const STATUS_FETCH_FAILED: &str = "Failed to load data";

/// Issued for every fetch. Only the most recently issued ticket may deliver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    id: u64,
    view: ViewConfig,
}

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was drawn.
    Applied,
    /// A later request superseded this one; the response was discarded.
    Stale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The event targeted a surface from an earlier render and was dropped.
    Stale,
    Idle,
    Hovering { index: usize },
}

/// Tooltip text as currently shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub date: String,
    pub price: String,
}

pub struct ChartView {
    config: ChartConfig,
    view: ViewConfig,
    series: Arc<Series>,
    rejected: Vec<ParseError>,
    state: Option<RenderState>,
    controller: Option<InteractionController>,
    generation: u64,
    issued: u64,
    pending: Option<FetchTicket>,
    // Whether data or a fetch failure has been applied for the current view.
    settled: bool,
    last_error: Option<ChartError>,
}

impl ChartView {
    /// Creates a chart for `view` showing a loading frame. Call
    /// [`ChartView::request_fetch`] to obtain the ticket for its first data.
    pub fn new(config: ChartConfig, view: ViewConfig) -> Self {
        let mut chart = Self {
            config,
            view,
            series: Arc::new(Series::default()),
            rejected: Vec::new(),
            state: None,
            controller: None,
            generation: 0,
            issued: 0,
            pending: None,
            settled: false,
            last_error: None,
        };
        chart.draw_empty(STATUS_LOADING.to_string());
        chart
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Samples dropped by the last normalization.
    pub fn rejected(&self) -> &[ParseError] {
        &self.rejected
    }

    /// Why the current frame is empty, if it is.
    pub fn last_error(&self) -> Option<&ChartError> {
        self.last_error.as_ref()
    }

    /// Increments on every render.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn render_state(&self) -> Option<&RenderState> {
        self.state.as_ref()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.state.as_ref().map(|s| &s.scene)
    }

    pub fn transform(&self) -> Option<&PlotTransform> {
        self.state.as_ref().and_then(RenderState::transform)
    }

    /// Overlay of the current render. `None` for empty frames.
    pub fn event_surface(&self) -> Option<EventSurface> {
        self.state.as_ref().and_then(RenderState::surface)
    }

    pub fn to_svg(&self) -> String {
        self.scene().map(Scene::to_svg).unwrap_or_default()
    }

    /// Records a new view, shows a loading frame titled for it and issues the
    /// ticket its fetch must deliver with. Returns `None` when `view` is
    /// already current.
    pub fn set_view_config(&mut self, view: ViewConfig) -> Option<FetchTicket> {
        if view == self.view {
            debug!(view = %view.title(), "view unchanged");
            return None;
        }
        info!(
            from = %self.view.title(),
            to = %view.title(),
            "view changed"
        );
        self.view = view;
        self.controller = None;
        self.series = Arc::new(Series::default());
        self.rejected.clear();
        self.settled = false;
        self.last_error = None;
        self.draw_empty(STATUS_LOADING.to_string());
        Some(self.request_fetch())
    }

    /// Issues a ticket for the current view, superseding any outstanding one.
    pub fn request_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket {
            id: self.issued,
            view: self.view.clone(),
        };
        if let Some(previous) = self.pending.replace(ticket.clone()) {
            debug!(superseded = previous.id, ticket = ticket.id, "fetch superseded");
        } else {
            debug!(ticket = ticket.id, "fetch issued");
        }
        ticket
    }

    /// The ticket that may currently deliver, if any.
    pub fn pending_fetch(&self) -> Option<&FetchTicket> {
        self.pending.as_ref()
    }

    /// Delivers a fetch response. Anything but the latest issued ticket is
    /// discarded, as is a second delivery of the same ticket.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<RawSample>, FetchError>,
    ) -> FetchOutcome {
        if self.pending.as_ref() != Some(&ticket) {
            warn!(
                ticket = ticket.id,
                latest = self.issued,
                view = %ticket.view.title(),
                "discarding stale fetch response"
            );
            return FetchOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(raw) => self.apply(raw),
            Err(err) => {
                warn!(view = %ticket.view.title(), error = %err, "fetch failed");
                self.series = Arc::new(Series::default());
                self.rejected.clear();
                self.settled = true;
                self.last_error = Some(err.into());
                self.redraw();
            }
        }
        FetchOutcome::Applied
    }

    /// Replaces the series of the current view and redraws.
    pub fn set_series(&mut self, raw: Vec<RawSample>) {
        self.apply(raw);
    }

    fn apply(&mut self, raw: Vec<RawSample>) {
        let normalized = normalize(raw);
        self.series = Arc::new(normalized.series);
        self.rejected = normalized.rejected;
        self.settled = true;
        self.last_error = None;
        self.redraw();
    }

    /// Rebuilds the chart from the current series and view. Redrawing twice
    /// in a row produces identical scenes.
    pub fn redraw(&mut self) {
        self.controller = None;

        let transform = match PlotTransform::from_series(
            &self.series,
            &self.config.layout,
            self.config.timezone,
        ) {
            Ok(transform) => transform,
            Err(err) => {
                let status = if !self.settled {
                    STATUS_LOADING
                } else if matches!(self.last_error, Some(ChartError::Fetch(_))) {
                    STATUS_FETCH_FAILED
                } else {
                    self.last_error = Some(err.into());
                    STATUS_NO_DATA
                };
                self.draw_empty(status.to_string());
                return;
            }
        };

        let mut scene = self.take_scene();
        self.generation += 1;
        let title = self.view.title();
        let rendered = render_chart(&mut scene, &self.series, &transform, &self.config, &title);
        let surface = EventSurface::new(self.generation, rendered.overlay);

        self.controller = Some(InteractionController::attach(
            Arc::clone(&self.series),
            transform.clone(),
            rendered.focus,
            &self.config,
        ));
        self.state = Some(RenderState {
            scene,
            generation: self.generation,
            frame: Frame::Chart {
                transform,
                rendered,
                surface,
            },
        });

        info!(
            title = %title,
            samples = self.series.len(),
            rejected = self.rejected.len(),
            generation = self.generation,
            "chart redrawn"
        );
    }

    fn draw_empty(&mut self, status: String) {
        let mut scene = self.take_scene();
        self.generation += 1;
        let title = self.view.title();
        render_empty_frame(&mut scene, &self.config, &title, &status);
        info!(title = %title, status = %status, generation = self.generation, "empty frame drawn");
        self.state = Some(RenderState {
            scene,
            generation: self.generation,
            frame: Frame::Empty { status },
        });
    }

    // Reuses the previous scene's allocation; the old state is gone after this.
    fn take_scene(&mut self) -> Scene {
        self.state
            .take()
            .map(|state| state.scene)
            .unwrap_or_else(|| Scene::new(self.config.layout.surface_size()))
    }

    pub fn hover_state(&self) -> HoverState {
        self.controller
            .as_ref()
            .map(InteractionController::state)
            .unwrap_or(HoverState::Idle)
    }

    /// Tooltip text while hovering.
    pub fn tooltip(&self) -> Option<TooltipContent> {
        if self.hover_state() == HoverState::Idle {
            return None;
        }
        let rendered = self.state.as_ref()?.rendered()?;
        let scene = self.scene()?;
        let text_of = |id| match scene.node(id).map(|n| &n.primitive) {
            Some(Primitive::Text { content, .. }) => Some(content.clone()),
            _ => None,
        };
        Some(TooltipContent {
            date: text_of(rendered.focus.date)?,
            price: text_of(rendered.focus.price)?,
        })
    }

    pub fn pointer_enter(&mut self, surface: EventSurface, position: Point) -> PointerOutcome {
        self.dispatch(surface, |controller, scene| {
            controller.pointer_enter(scene, position);
        })
    }

    pub fn pointer_move(&mut self, surface: EventSurface, position: Point) -> PointerOutcome {
        self.dispatch(surface, |controller, scene| {
            controller.pointer_move(scene, position);
        })
    }

    pub fn pointer_leave(&mut self, surface: EventSurface) -> PointerOutcome {
        self.dispatch(surface, |controller, scene| controller.pointer_leave(scene))
    }

    fn dispatch(
        &mut self,
        surface: EventSurface,
        f: impl FnOnce(&mut InteractionController, &mut Scene),
    ) -> PointerOutcome {
        let (Some(state), Some(controller)) = (self.state.as_mut(), self.controller.as_mut()) else {
            debug!(token = surface.token(), "pointer event without a live surface");
            return PointerOutcome::Stale;
        };
        if state.surface() != Some(surface) {
            debug!(
                token = surface.token(),
                current = state.generation,
                "ignoring pointer event for superseded surface"
            );
            return PointerOutcome::Stale;
        }

        f(controller, &mut state.scene);
        match controller.state() {
            HoverState::Idle => PointerOutcome::Idle,
            HoverState::Hovering { index } => PointerOutcome::Hovering { index },
        }
    }
}
