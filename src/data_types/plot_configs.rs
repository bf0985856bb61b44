use super::color::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinePlotConfig {
    pub color: Rgba,
    pub line_width: f32,
}

impl Default for LinePlotConfig {
    fn default() -> Self {
        Self {
            color: Rgba::rgb(0xEAB308),
            line_width: 2.0,
        }
    }
}

/// Geometry of the hover marker and its tooltip, relative to the marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub marker_radius: f32,
    pub tooltip_width: f32,
    pub tooltip_height: f32,
    pub tooltip_offset_x: f32,
    pub tooltip_offset_y: f32,
    pub tooltip_corner_radius: f32,
    /// Left inset of both tooltip text lines inside the box.
    pub text_inset: f32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            marker_radius: 5.0,
            tooltip_width: 100.0,
            tooltip_height: 50.0,
            tooltip_offset_x: 10.0,
            tooltip_offset_y: -22.0,
            tooltip_corner_radius: 4.0,
            text_inset: 8.0,
        }
    }
}
