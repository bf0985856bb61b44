use crate::data_types::{ChartLayout, FocusConfig, LinePlotConfig};
use crate::theme::ChartTheme;
use chrono_tz::Tz;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything about the chart that is not data: geometry, styling, locale.
/// Every field has a default, so a partial JSON document is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub layout: ChartLayout,
    pub line: LinePlotConfig,
    pub focus: FocusConfig,
    pub theme: ChartTheme,
    /// Target number of value-axis ticks.
    pub value_ticks: usize,
    /// Horizontal pixels reserved per time-axis label.
    pub time_label_spacing: f32,
    /// Display time zone for tick labels and the tooltip date.
    pub timezone: Tz,
    pub x_caption: String,
    pub y_caption: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::default(),
            line: LinePlotConfig::default(),
            focus: FocusConfig::default(),
            theme: ChartTheme::default(),
            value_ticks: 10,
            time_label_spacing: 100.0,
            timezone: Tz::UTC,
            x_caption: "Date".to_string(),
            y_caption: "Price (USD)".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid chart configuration")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading chart configuration {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Number of time-axis labels that fit the plot width.
    pub fn time_ticks(&self) -> usize {
        let width = self.layout.plot_size().width;
        let per_label = self.time_label_spacing.max(1.0);
        ((width / per_label).floor() as usize).clamp(2, 12)
    }
}
