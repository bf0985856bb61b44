use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Position on the time axis (epoch milliseconds).
    #[inline]
    pub fn time_ms(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64
    }
}

/// Timestamp as emitted by a data source, before parsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Unix epoch milliseconds.
    EpochMillis(f64),
    /// RFC 3339, `YYYY-MM-DDTHH:MM:SS` (UTC) or `YYYY-MM-DD` (UTC midnight).
    Text(String),
}

/// Wire form of a sample: a `[timestamp, value]` pair.
///
/// The value is optional because upstream feeds occasionally emit `null`
/// for missing prices; such entries are dropped during normalization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawSample(pub RawTimestamp, pub Option<f64>);

impl RawSample {
    pub fn epoch_ms(ms: f64, value: f64) -> Self {
        Self(RawTimestamp::EpochMillis(ms), Some(value))
    }

    pub fn text(timestamp: impl Into<String>, value: f64) -> Self {
        Self(RawTimestamp::Text(timestamp.into()), Some(value))
    }
}

/// Ordered samples, strictly increasing in time once normalized.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Wraps samples as-is. Callers are responsible for ordering; use
    /// [`crate::normalize::normalize`] for untrusted input.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// (min, max) of the time axis in epoch milliseconds.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some((first.time_ms(), last.time_ms()))
    }

    /// (min, max) of the values.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), s| (lo.min(s.value), hi.max(s.value)),
        ))
    }
}
