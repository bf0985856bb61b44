//! Pointer handling for one render.
//!
//! An [`InteractionController`] is created for every render with the series,
//! transform and focus nodes of that render passed in explicitly. It never
//! outlives the render: the lifecycle drops it before drawing the next one.

use super::{ChartView, EventSurface, PointerOutcome};
use crate::config::ChartConfig;
use crate::data_types::{FocusConfig, Series};
use crate::geometry::{Point, Size};
use crate::locator::{self, Located};
use crate::rendering::FocusHandles;
use crate::scene::Scene;
use crate::transform::PlotTransform;
use crate::utils::{currency, date_formatter};
use crate::view_controller::ViewController;
use chrono_tz::Tz;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    /// Focus marker hidden.
    Idle,
    /// Focus marker and tooltip shown on the sample at `index`.
    Hovering { index: usize },
}

pub struct InteractionController {
    series: Arc<Series>,
    transform: PlotTransform,
    focus: FocusHandles,
    focus_config: FocusConfig,
    tz: Tz,
    state: HoverState,
}

impl InteractionController {
    pub fn attach(
        series: Arc<Series>,
        transform: PlotTransform,
        focus: FocusHandles,
        config: &ChartConfig,
    ) -> Self {
        Self {
            series,
            transform,
            focus,
            focus_config: config.focus.clone(),
            tz: config.timezone,
            state: HoverState::Idle,
        }
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Idle -> Hovering. `position` is in surface coordinates.
    pub fn pointer_enter(&mut self, scene: &mut Scene, position: Point) -> Option<Located> {
        for id in self.focus.all() {
            scene.set_visible(id, true);
        }
        self.track(scene, position)
    }

    /// Re-locates the nearest sample and moves the focus group onto it. A
    /// move without a preceding enter is treated as one.
    pub fn pointer_move(&mut self, scene: &mut Scene, position: Point) -> Option<Located> {
        if self.state == HoverState::Idle {
            return self.pointer_enter(scene, position);
        }
        self.track(scene, position)
    }

    /// Hovering -> Idle.
    pub fn pointer_leave(&mut self, scene: &mut Scene) {
        for id in self.focus.all() {
            scene.set_visible(id, false);
        }
        self.state = HoverState::Idle;
    }

    fn track(&mut self, scene: &mut Scene, position: Point) -> Option<Located> {
        let plot_x = position.x - self.transform.bounds.origin.x;
        let located = locator::locate(&self.series, &self.transform, plot_x)?;
        self.state = HoverState::Hovering {
            index: located.index,
        };

        let origin = self.transform.bounds.origin;
        let marker = located.position.offset(origin.x, origin.y);
        scene.set_offset(self.focus.marker, marker);

        let cfg = &self.focus_config;
        let preferred = Point::new(cfg.tooltip_offset_x, cfg.tooltip_offset_y);
        let placed = ViewController::place_tooltip(
            located.position,
            self.transform.bounds.size,
            Size::new(cfg.tooltip_width, cfg.tooltip_height),
            preferred,
        );
        let shifted = marker.offset(placed.x - preferred.x, placed.y - preferred.y);
        for id in [self.focus.tooltip, self.focus.date, self.focus.price] {
            scene.set_offset(id, shifted);
        }

        if let Some(text) = scene.text_mut(self.focus.date) {
            date_formatter::write_short_date(text, located.sample.time_ms(), self.tz);
        }
        if let Some(text) = scene.text_mut(self.focus.price) {
            currency::write_currency(text, located.sample.value, 2);
        }

        Some(located)
    }
}

/// Turns raw pointer positions from a window backend into enter, move and
/// leave calls on whichever [`EventSurface`] is current.
#[derive(Debug, Default)]
pub struct PointerTracker {
    entered: Option<EventSurface>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface the pointer is currently inside, as last reported.
    pub fn entered(&self) -> Option<EventSurface> {
        self.entered
    }

    /// `position` is in surface coordinates, `None` once the pointer left the
    /// element. A surface replaced by a redraw is left and the new one entered.
    pub fn track(&mut self, chart: &mut ChartView, position: Option<Point>) -> PointerOutcome {
        let target = chart
            .event_surface()
            .zip(position)
            .filter(|(surface, p)| surface.contains(*p));

        match (self.entered, target) {
            (Some(prev), Some((surface, p))) if prev == surface => chart.pointer_move(surface, p),
            (prev, Some((surface, p))) => {
                if let Some(prev) = prev {
                    chart.pointer_leave(prev);
                }
                self.entered = Some(surface);
                chart.pointer_enter(surface, p)
            }
            (Some(prev), None) => {
                self.entered = None;
                match chart.pointer_leave(prev) {
                    PointerOutcome::Stale => PointerOutcome::Idle,
                    outcome => outcome,
                }
            }
            (None, None) => PointerOutcome::Idle,
        }
    }
}
