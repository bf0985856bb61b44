use crate::data_types::{AxisEdge, AxisFormat};
use crate::geometry::Point;
use crate::scene::{Primitive, Role, Scene, Stroke, TextAnchor, TextStyle};
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;

/// Gap between a tick mark and its label.
const LABEL_PADDING: f32 = 3.0;

pub struct AxisRenderer;

impl AxisRenderer {
    /// Draws the domain line, tick marks and tick labels of one axis along
    /// the edge of the plot area. Returns the number of ticks drawn.
    pub fn paint_axis(
        scene: &mut Scene,
        transform: &PlotTransform,
        edge: AxisEdge,
        tick_count: usize,
        theme: &ChartTheme,
    ) -> usize {
        let bounds = transform.bounds;
        let line_stroke = Stroke {
            color: theme.axis_line,
            width: 1.0,
        };
        let label_style = TextStyle::new(theme.axis_label_size, theme.axis_label);
        let is_vertical = edge == AxisEdge::Left;
        let format: AxisFormat = edge.format();

        // 1. Axis border line
        let (from, to, line_role) = if is_vertical {
            (
                Point::new(bounds.origin.x, bounds.origin.y),
                Point::new(bounds.origin.x, bounds.bottom()),
                Role::YAxisLine,
            )
        } else {
            (
                Point::new(bounds.origin.x, bounds.bottom()),
                Point::new(bounds.right(), bounds.bottom()),
                Role::XAxisLine,
            )
        };
        scene.push(
            line_role,
            Primitive::Line {
                from,
                to,
                stroke: line_stroke,
            },
        );

        // 2. Ticks and labels
        let scale = if is_vertical {
            &transform.y_scale
        } else {
            &transform.x_scale
        };
        let ticks = scale.ticks(tick_count);
        let mut drawn = 0;

        for tick in ticks {
            let label = scale.format_tick(tick, &format, tick_count);
            if is_vertical {
                let y = transform.y_data_to_screen(tick);
                if y < bounds.origin.y - 0.5 || y > bounds.bottom() + 0.5 {
                    continue;
                }
                let x = bounds.origin.x;
                scene.push(
                    Role::YTick,
                    Primitive::Line {
                        from: Point::new(x - theme.tick_size, y),
                        to: Point::new(x, y),
                        stroke: line_stroke,
                    },
                );
                scene.push(
                    Role::YTickLabel,
                    Primitive::Text {
                        origin: Point::new(
                            x - theme.tick_size - LABEL_PADDING,
                            y + theme.axis_label_size / 3.0,
                        ),
                        content: label,
                        style: label_style.anchor(TextAnchor::End),
                    },
                );
            } else {
                let x = transform.x_data_to_screen(tick);
                if x < bounds.origin.x - 0.5 || x > bounds.right() + 0.5 {
                    continue;
                }
                let y = bounds.bottom();
                scene.push(
                    Role::XTick,
                    Primitive::Line {
                        from: Point::new(x, y),
                        to: Point::new(x, y + theme.tick_size),
                        stroke: line_stroke,
                    },
                );
                scene.push(
                    Role::XTickLabel,
                    Primitive::Text {
                        origin: Point::new(
                            x,
                            y + theme.tick_size + LABEL_PADDING + theme.axis_label_size,
                        ),
                        content: label,
                        style: label_style.anchor(TextAnchor::Middle),
                    },
                );
            }
            drawn += 1;
        }

        drawn
    }
}
