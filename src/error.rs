//! Error taxonomy. None of these escape a redraw: each one degrades the
//! chart to a smaller but structurally valid drawing.

use thiserror::Error;

/// A raw sample that could not be turned into a [`crate::Sample`]. The sample
/// is dropped and the rest of the series continues.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("sample {index}: unparseable timestamp {raw:?}")]
    InvalidTimestamp { index: usize, raw: String },

    #[error("sample {index}: timestamp {millis} ms is out of range")]
    TimestampOutOfRange { index: usize, millis: f64 },

    #[error("sample {index}: missing or non-finite value")]
    InvalidValue { index: usize },
}

impl ParseError {
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidTimestamp { index, .. }
            | Self::TimestampOutOfRange { index, .. }
            | Self::InvalidValue { index } => *index,
        }
    }
}

/// No usable samples: scales cannot be built and only an empty frame is drawn.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("series has no usable samples")]
pub struct EmptySeriesError;

/// The data source failed to produce a series.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no data for {asset} ({window})")]
    NotFound { asset: String, window: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("fetch worker stopped before delivering a response")]
    WorkerLost,

    #[error("fetch failed: {0}")]
    Source(eyre::Report),
}

impl From<eyre::Report> for FetchError {
    fn from(report: eyre::Report) -> Self {
        Self::Source(report)
    }
}

/// Why the current frame is empty, kept by the chart for the host to inspect.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    EmptySeries(#[from] EmptySeriesError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
