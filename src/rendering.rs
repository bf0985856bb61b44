// Rendering functions for the chart

use crate::axis_renderer::AxisRenderer;
use crate::config::ChartConfig;
use crate::data_types::{AxisEdge, Rgba, Series};
use crate::geometry::{Bounds, Point, Size};
use crate::plot_types::{LinePlot, PlotRenderer};
use crate::scene::{NodeId, Primitive, Role, Scene, TextAnchor, TextStyle};
use crate::transform::PlotTransform;
use tracing::debug;

/// Scene nodes of the hover marker and tooltip. Their primitives are laid
/// out around (0, 0); the node offsets place them on the focused sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusHandles {
    pub marker: NodeId,
    pub tooltip: NodeId,
    pub date: NodeId,
    pub price: NodeId,
}

impl FocusHandles {
    pub fn all(&self) -> [NodeId; 4] {
        [self.marker, self.tooltip, self.date, self.price]
    }
}

/// What a full render produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedChart {
    /// Invisible event surface, in surface coordinates.
    pub overlay: Bounds,
    pub focus: FocusHandles,
    pub vertex_count: usize,
    pub tick_count: usize,
}

/// Clears `scene` and draws axes, series, title, captions, the event overlay
/// and the (hidden) focus group.
pub fn render_chart(
    scene: &mut Scene,
    series: &Series,
    transform: &PlotTransform,
    config: &ChartConfig,
    title: &str,
) -> RenderedChart {
    scene.reset(config.layout.surface_size());
    paint_background(scene, config);

    let x_ticks = AxisRenderer::paint_axis(
        scene,
        transform,
        AxisEdge::Bottom,
        config.time_ticks(),
        &config.theme,
    );
    let y_ticks = AxisRenderer::paint_axis(
        scene,
        transform,
        AxisEdge::Left,
        config.value_ticks,
        &config.theme,
    );

    let vertex_count = LinePlot::new(config.line.clone()).render(scene, transform, series);

    paint_title(scene, config, title);
    paint_captions(scene, config);

    let overlay = transform.bounds;
    scene.push(
        Role::Overlay,
        Primitive::Rect {
            bounds: overlay,
            fill: Rgba::transparent(),
            corner_radius: 0.0,
        },
    );

    let focus = paint_focus(scene, config);

    debug!(
        vertices = vertex_count,
        x_ticks, y_ticks, "rendered chart"
    );

    RenderedChart {
        overlay,
        focus,
        vertex_count,
        tick_count: x_ticks + y_ticks,
    }
}

/// Clears `scene` and draws only the title and a status line: no axes, no
/// ticks, no path and no event surface.
pub fn render_empty_frame(scene: &mut Scene, config: &ChartConfig, title: &str, status: &str) {
    scene.reset(config.layout.surface_size());
    paint_background(scene, config);
    paint_title(scene, config, title);

    let plot = config.layout.plot_bounds();
    scene.push(
        Role::Status,
        Primitive::Text {
            origin: Point::new(
                plot.origin.x + plot.size.width / 2.0,
                plot.origin.y + plot.size.height / 2.0,
            ),
            content: status.to_string(),
            style: TextStyle::new(config.theme.caption_size, config.theme.caption)
                .anchor(TextAnchor::Middle),
        },
    );
}

fn paint_background(scene: &mut Scene, config: &ChartConfig) {
    scene.push(
        Role::Background,
        Primitive::Rect {
            bounds: Bounds::new(Point::default(), config.layout.surface_size()),
            fill: config.theme.background,
            corner_radius: 0.0,
        },
    );
}

fn paint_title(scene: &mut Scene, config: &ChartConfig, title: &str) {
    let plot = config.layout.plot_bounds();
    scene.push(
        Role::Title,
        Primitive::Text {
            origin: Point::new(
                plot.origin.x + plot.size.width / 2.0,
                config.layout.margin.top / 2.0,
            ),
            content: title.to_string(),
            style: TextStyle::new(config.theme.title_size, config.theme.title)
                .anchor(TextAnchor::Middle),
        },
    );
}

fn paint_captions(scene: &mut Scene, config: &ChartConfig) {
    let plot = config.layout.plot_bounds();
    let theme = &config.theme;
    let style = TextStyle::new(theme.caption_size, theme.caption).anchor(TextAnchor::Middle);

    scene.push(
        Role::XCaption,
        Primitive::Text {
            origin: Point::new(
                plot.origin.x + plot.size.width / 2.0,
                config.layout.height - 10.0,
            ),
            content: config.x_caption.clone(),
            style,
        },
    );
    scene.push(
        Role::YCaption,
        Primitive::Text {
            origin: Point::new(theme.caption_size, plot.origin.y + plot.size.height / 2.0),
            content: config.y_caption.clone(),
            style: style.rotated(-90.0),
        },
    );
}

fn paint_focus(scene: &mut Scene, config: &ChartConfig) -> FocusHandles {
    let focus = &config.focus;
    let theme = &config.theme;
    let text_x = focus.tooltip_offset_x + focus.text_inset;
    let line_height = focus.tooltip_height * 0.4;

    let marker = scene.push_hidden(
        Role::FocusMarker,
        Primitive::Circle {
            center: Point::default(),
            radius: focus.marker_radius,
            fill: theme.marker,
        },
    );
    let tooltip = scene.push_hidden(
        Role::TooltipBox,
        Primitive::Rect {
            bounds: Bounds::new(
                Point::new(focus.tooltip_offset_x, focus.tooltip_offset_y),
                Size::new(focus.tooltip_width, focus.tooltip_height),
            ),
            fill: theme.tooltip_background,
            corner_radius: focus.tooltip_corner_radius,
        },
    );
    let text_style = TextStyle::new(theme.tooltip_text_size, theme.tooltip_text);
    let date = scene.push_hidden(
        Role::TooltipDate,
        Primitive::Text {
            origin: Point::new(text_x, focus.tooltip_offset_y + line_height),
            content: String::with_capacity(16),
            style: text_style,
        },
    );
    let price = scene.push_hidden(
        Role::TooltipPrice,
        Primitive::Text {
            origin: Point::new(text_x, focus.tooltip_offset_y + 2.0 * line_height),
            content: String::with_capacity(16),
            style: text_style.bold(),
        },
    );

    FocusHandles {
        marker,
        tooltip,
        date,
        price,
    }
}
