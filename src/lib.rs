//! price_chart: a time-series price chart rendered to a retained scene

pub mod axis_renderer;
pub mod chart_view;
pub mod config;
pub mod data_types;
pub mod error;
pub mod geometry;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod locator;
pub mod normalize;
pub mod plot_types;
pub mod rendering;
pub mod scales;
pub mod scene;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use chart_view::{
    ChartHandle, ChartView, EventSurface, FetchOutcome, FetchTicket, HoverState, PointerOutcome,
    PointerTracker, TooltipContent,
};
pub use config::ChartConfig;
pub use data_types::{
    Asset, PriceSource, RawSample, RawTimestamp, Sample, Series, StaticSource, TimeWindow,
    ViewConfig,
};
pub use error::{ChartError, EmptySeriesError, FetchError, ParseError};
pub use plot_types::{LinePlot, PlotRenderer};
pub use scene::{Role, Scene};
