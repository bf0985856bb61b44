//! Paints a [`Scene`] into a gpui window and feeds pointer input back to the
//! chart.

use crate::chart_view::handle::fetch_guarded;
use crate::chart_view::{ChartHandle, ChartView, FetchOutcome, FetchTicket, PointerTracker};
use crate::data_types::{PriceSource, RawSample, Rgba, ViewConfig};
use crate::geometry;
use crate::scene::{Primitive, Scene, TextAnchor, TextStyle};
use gpui::prelude::*;
use gpui::{
    canvas, div, fill, point, px, size, App, Bounds, Canvas, Context, Hsla, MouseMoveEvent,
    PathBuilder, Pixels, Point, TextRun, Window,
};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

fn hsla(color: Rgba) -> Hsla {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
    .into()
}

fn to_px(origin: Point<Pixels>, p: geometry::Point, offset: geometry::Point) -> Point<Pixels> {
    origin + point(px(p.x + offset.x), px(p.y + offset.y))
}

/// Paints every visible node of `scene` with its top-left corner at `origin`.
/// Text rotation is not supported and rotated labels are drawn upright.
pub fn paint_scene(scene: &Scene, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
    for node in scene.nodes().iter().filter(|n| n.visible) {
        let offset = node.offset;
        match &node.primitive {
            Primitive::Line { from, to, stroke } => {
                let mut builder = PathBuilder::stroke(px(stroke.width));
                builder.move_to(to_px(origin, *from, offset));
                builder.line_to(to_px(origin, *to, offset));
                if let Ok(path) = builder.build() {
                    window.paint_path(path, hsla(stroke.color));
                }
            }
            Primitive::Polyline { points, stroke } => {
                let mut builder = PathBuilder::stroke(px(stroke.width));
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    builder.move_to(to_px(origin, *first, offset));
                }
                for p in iter {
                    builder.line_to(to_px(origin, *p, offset));
                }
                if let Ok(path) = builder.build() {
                    window.paint_path(path, hsla(stroke.color));
                }
            }
            Primitive::Rect {
                bounds,
                fill: color,
                corner_radius,
            } => {
                if color.a <= 0.0 {
                    continue;
                }
                let rect = Bounds::new(
                    to_px(origin, bounds.origin, offset),
                    size(px(bounds.size.width), px(bounds.size.height)),
                );
                window.paint_quad(fill(rect, hsla(*color)).corner_radii(px(*corner_radius)));
            }
            Primitive::Circle {
                center,
                radius,
                fill: color,
            } => {
                let c = to_px(origin, *center, offset);
                let rect = Bounds::new(
                    c - point(px(*radius), px(*radius)),
                    size(px(radius * 2.0), px(radius * 2.0)),
                );
                window.paint_quad(fill(rect, hsla(*color)).corner_radii(px(*radius)));
            }
            Primitive::Text {
                origin: at,
                content,
                style,
            } => paint_text(to_px(origin, *at, offset), content, style, window, cx),
        }
    }
}

fn paint_text(at: Point<Pixels>, content: &str, style: &TextStyle, window: &mut Window, cx: &mut App) {
    if content.is_empty() {
        return;
    }
    let font = gpui::TextStyle::default().font();
    let run = TextRun {
        len: content.len(),
        font: if style.bold { font.bold() } else { font },
        color: hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let font_size = px(style.size);
    let line = window
        .text_system()
        .shape_line(content.to_string().into(), font_size, &[run], None);
    let shift = match style.anchor {
        TextAnchor::Start => px(0.0),
        TextAnchor::Middle => line.width / 2.0,
        TextAnchor::End => line.width,
    };
    // Scene text origins sit on the baseline.
    let top_left = at - point(shift, line.ascent);
    let _ = line.paint(top_left, font_size, window, cx);
}

/// A canvas element that paints the current scene of `chart`. `origin`
/// receives the window position the scene was painted at.
pub fn chart_canvas(chart: ChartHandle, origin: Rc<Cell<Point<Pixels>>>) -> Canvas<ChartHandle> {
    canvas(
        move |bounds, _window, _cx| {
            origin.set(bounds.origin);
            chart
        },
        |bounds, chart, window, cx| {
            chart.read(|view| {
                if let Some(scene) = view.scene() {
                    paint_scene(scene, bounds.origin, window, cx);
                }
            });
        },
    )
}

/// Window view around a [`ChartHandle`].
///
/// Mouse movement over the chart drives hovering, and fetches started here
/// repaint the view once their response is applied. Changes made through
/// other clones of the handle need an explicit `cx.notify()`.
pub struct PriceChartView {
    chart: ChartHandle,
    tracker: PointerTracker,
    origin: Rc<Cell<Point<Pixels>>>,
}

impl PriceChartView {
    pub fn new(chart: ChartHandle) -> Self {
        Self {
            chart,
            tracker: PointerTracker::new(),
            origin: Rc::new(Cell::new(Point::default())),
        }
    }

    pub fn chart(&self) -> &ChartHandle {
        &self.chart
    }

    /// Switches to `view` and fetches it on the background executor.
    pub fn show(&mut self, view: ViewConfig, source: Arc<dyn PriceSource>, cx: &mut Context<Self>) {
        if let Some(ticket) = self.chart.set_view_config(view) {
            cx.notify();
            self.fetch(ticket, source, cx);
        }
    }

    /// Fetches the current view again.
    pub fn refresh(&mut self, source: Arc<dyn PriceSource>, cx: &mut Context<Self>) {
        let ticket = self.chart.update(ChartView::request_fetch);
        self.fetch(ticket, source, cx);
    }

    pub fn set_series(&mut self, raw: Vec<RawSample>, cx: &mut Context<Self>) {
        self.chart.update(|chart| chart.set_series(raw));
        cx.notify();
    }

    fn fetch(&mut self, ticket: FetchTicket, source: Arc<dyn PriceSource>, cx: &mut Context<Self>) {
        let job = ticket.clone();
        let response = cx
            .background_executor()
            .spawn(async move { fetch_guarded(source.as_ref(), &job) });
        let chart = self.chart.clone();
        cx.spawn(async move |this, cx| {
            let result = response.await;
            if chart.deliver(ticket, result) == FetchOutcome::Applied {
                let _ = this.update(cx, |_, cx| cx.notify());
            }
        })
        .detach();
    }

    /// `position` is in window coordinates, `None` when the pointer left.
    fn pointer_at(&mut self, position: Option<Point<Pixels>>, cx: &mut Context<Self>) {
        let local = position.map(|p| {
            let p = p - self.origin.get();
            geometry::Point::new(f32::from(p.x), f32::from(p.y))
        });
        let outcome = self.chart.track_pointer(&mut self.tracker, local);
        debug!(?outcome, "pointer");
        cx.notify();
    }
}

impl Render for PriceChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let surface = self.chart.read(|chart| chart.config().layout.surface_size());

        div()
            .id(("price-chart", cx.entity_id()))
            .w(px(surface.width))
            .h(px(surface.height))
            .child(chart_canvas(self.chart.clone(), Rc::clone(&self.origin)).size_full())
            .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, _window, cx| {
                this.pointer_at(Some(event.position), cx);
            }))
            .on_hover(cx.listener(|this, hovered: &bool, window, cx| {
                let position = hovered.then(|| window.mouse_position());
                this.pointer_at(position, cx);
            }))
    }
}
