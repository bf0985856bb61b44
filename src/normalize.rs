//! Raw `(timestamp, value)` pairs to a typed, de-duplicated [`Series`].
//!
//! Input is trusted to be time-ascending already (feeds emit in order). The
//! only repair performed is collapsing adjacent repeats of the same timestamp,
//! which overlapping fetch windows produce; the last occurrence wins.

use crate::data_types::{RawSample, RawTimestamp, Sample, Series};
use crate::error::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound, TimeZone, Utc};
use tracing::{debug, warn};

/// Outcome of a normalization pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Normalized {
    pub series: Series,
    /// Entries that were dropped, in input order.
    pub rejected: Vec<ParseError>,
}

pub fn normalize<I>(raw: I) -> Normalized
where
    I: IntoIterator<Item = RawSample>,
{
    let raw = raw.into_iter();
    let mut samples: Vec<Sample> = Vec::with_capacity(raw.size_hint().0);
    let mut rejected = Vec::new();
    let mut duplicates = 0usize;

    for (index, entry) in raw.enumerate() {
        let sample = match parse_sample(index, &entry) {
            Ok(s) => s,
            Err(e) => {
                warn!("dropping malformed sample: {}", e);
                rejected.push(e);
                continue;
            }
        };

        if let Some(last) = samples.last_mut() {
            if last.timestamp == sample.timestamp {
                *last = sample;
                duplicates += 1;
                continue;
            }
        }
        samples.push(sample);
    }

    debug!(
        kept = samples.len(),
        dropped = rejected.len(),
        duplicates,
        "normalized series"
    );

    Normalized {
        series: Series::from_samples(samples),
        rejected,
    }
}

pub fn parse_sample(index: usize, raw: &RawSample) -> Result<Sample, ParseError> {
    let timestamp = parse_timestamp(index, &raw.0)?;
    match raw.1 {
        Some(value) if value.is_finite() => Ok(Sample::new(timestamp, value)),
        _ => Err(ParseError::InvalidValue { index }),
    }
}

pub fn parse_timestamp(index: usize, raw: &RawTimestamp) -> Result<DateTime<Utc>, ParseError> {
    match raw {
        RawTimestamp::EpochMillis(ms) => {
            let out_of_range = ParseError::TimestampOutOfRange { index, millis: *ms };
            if !ms.is_finite() || ms.abs() > i64::MAX as f64 {
                return Err(out_of_range);
            }
            DateTime::from_timestamp_millis(ms.round() as i64).ok_or(out_of_range)
        }
        // Everything downstream works in whole milliseconds.
        RawTimestamp::Text(text) => parse_text_timestamp(text.trim())
            .map(|dt| dt.trunc_subsecs(3))
            .ok_or_else(|| ParseError::InvalidTimestamp {
                index,
                raw: text.clone(),
            }),
    }
}

fn parse_text_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
