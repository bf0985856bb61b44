//! Retained drawing surface.
//!
//! A [`Scene`] is a flat list of primitives tagged with the role they play in
//! the chart. Renderers only ever append to a freshly cleared scene; the
//! interaction layer edits the few focus nodes it was handed by id. Backends
//! (SVG here, GPUI behind the `gpui` feature) paint it in list order.

use crate::data_types::Rgba;
use crate::geometry::{Bounds, Point, Size};
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Background,
    XAxisLine,
    XTick,
    XTickLabel,
    YAxisLine,
    YTick,
    YTickLabel,
    SeriesPath,
    Title,
    XCaption,
    YCaption,
    Status,
    Overlay,
    FocusMarker,
    TooltipBox,
    TooltipDate,
    TooltipPrice,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgba,
    pub anchor: TextAnchor,
    pub bold: bool,
    /// Degrees, clockwise, around the text origin.
    pub rotation: f32,
}

impl TextStyle {
    pub fn new(size: f32, color: Rgba) -> Self {
        Self {
            size,
            color,
            anchor: TextAnchor::Start,
            bold: false,
            rotation: 0.0,
        }
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Text {
        origin: Point,
        content: String,
        style: TextStyle,
    },
    Rect {
        bounds: Bounds,
        fill: Rgba,
        corner_radius: f32,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Rgba,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub role: Role,
    pub primitive: Primitive,
    pub visible: bool,
    /// Translation applied to the primitive when painting.
    pub offset: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    size: Size,
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            nodes: Vec::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Removes every primitive and resizes the surface.
    pub fn reset(&mut self, size: Size) {
        self.size = size;
        self.nodes.clear();
    }

    pub fn push(&mut self, role: Role, primitive: Primitive) -> NodeId {
        self.nodes.push(Node {
            role,
            primitive,
            visible: true,
            offset: Point::default(),
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn push_hidden(&mut self, role: Role, primitive: Primitive) -> NodeId {
        let id = self.push(role, primitive);
        self.nodes[id.0].visible = false;
        id
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    pub fn count(&self, role: Role) -> usize {
        self.with_role(role).count()
    }

    /// Total vertices of the series polyline(s).
    pub fn path_vertex_count(&self) -> usize {
        self.with_role(Role::SeriesPath)
            .map(|n| match &n.primitive {
                Primitive::Polyline { points, .. } => points.len(),
                _ => 0,
            })
            .sum()
    }

    /// Tick marks on both axes.
    pub fn tick_count(&self) -> usize {
        self.count(Role::XTick) + self.count(Role::YTick)
    }

    /// Content of the first text node with `role`.
    pub fn text(&self, role: Role) -> Option<&str> {
        self.with_role(role).find_map(|n| match &n.primitive {
            Primitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.visible = visible;
        }
    }

    pub fn set_offset(&mut self, id: NodeId, offset: Point) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.offset = offset;
        }
    }

    /// Mutable access to a text node's content, for in-place rewrites.
    pub fn text_mut(&mut self, id: NodeId) -> Option<&mut String> {
        match self.nodes.get_mut(id.0).map(|n| &mut n.primitive) {
            Some(Primitive::Text { content, .. }) => Some(content),
            _ => None,
        }
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(256 + self.nodes.len() * 96);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height
        );
        for node in self.nodes.iter().filter(|n| n.visible) {
            let _ = write_node(&mut out, node);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_node(out: &mut String, node: &Node) -> std::fmt::Result {
    let dx = node.offset.x;
    let dy = node.offset.y;
    match &node.primitive {
        Primitive::Line { from, to, stroke } => writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
            from.x + dx,
            from.y + dy,
            to.x + dx,
            to.y + dy,
            stroke.color.to_hex(),
            stroke.color.a,
            stroke.width
        ),
        Primitive::Polyline { points, stroke } => {
            out.push_str(r#"  <polyline fill="none" points=""#);
            for (i, p) in points.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write!(out, "{:.2},{:.2}", p.x + dx, p.y + dy)?;
            }
            writeln!(
                out,
                r#"" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
                stroke.color.to_hex(),
                stroke.color.a,
                stroke.width
            )
        }
        Primitive::Text {
            origin,
            content,
            style,
        } => {
            let anchor = match style.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let x = origin.x + dx;
            let y = origin.y + dy;
            write!(
                out,
                r#"  <text x="{}" y="{}" font-size="{}" fill="{}" fill-opacity="{}" text-anchor="{}""#,
                x,
                y,
                style.size,
                style.color.to_hex(),
                style.color.a,
                anchor
            )?;
            if style.bold {
                out.push_str(r#" font-weight="bold""#);
            }
            if style.rotation != 0.0 {
                write!(out, r#" transform="rotate({} {} {})""#, style.rotation, x, y)?;
            }
            out.push('>');
            escape_xml(out, content);
            out.push_str("</text>\n");
            Ok(())
        }
        Primitive::Rect {
            bounds,
            fill,
            corner_radius,
        } => writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" fill-opacity="{}"/>"#,
            bounds.origin.x + dx,
            bounds.origin.y + dy,
            bounds.size.width,
            bounds.size.height,
            corner_radius,
            fill.to_hex(),
            fill.a
        ),
        Primitive::Circle {
            center,
            radius,
            fill,
        } => writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
            center.x + dx,
            center.y + dy,
            radius,
            fill.to_hex(),
            fill.a
        ),
    }
}

fn escape_xml(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
