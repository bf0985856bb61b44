use crate::data_types::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub background: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub axis_label_size: f32,
    pub tick_size: f32,
    pub title: Rgba,
    pub title_size: f32,
    pub caption: Rgba,
    pub caption_size: f32,
    pub marker: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
    pub tooltip_text_size: f32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        let gray = Rgba::rgb(0x9CA3AF);
        let accent = Rgba::rgb(0xEAB308);
        Self {
            background: Rgba::transparent(),
            axis_line: gray,
            axis_label: gray,
            axis_label_size: 12.0,
            tick_size: 6.0,
            title: accent,
            title_size: 24.0,
            caption: gray,
            caption_size: 14.0,
            marker: accent,
            tooltip_background: Rgba::rgb(0xFFFFFF).alpha(0.7),
            tooltip_text: Rgba::rgb(0x000000),
            tooltip_text_size: 12.0,
        }
    }
}
