use crate::data_types::AxisFormat;
use crate::utils::{currency, date_formatter, time_ticks};
use chrono_tz::Tz;

/// Continuous linear map from a data domain to a pixel range.
///
/// Total over the real line: values outside the domain extrapolate.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }
}

impl LinearScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, d0: f64, d1: f64) -> Self {
        self.domain = (d0, d1);
        self
    }

    pub fn with_range(mut self, r0: f64, r1: f64) -> Self {
        self.range = (r0, r1);
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[inline]
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Round-valued ticks (1, 2 or 5 times a power of ten) inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Step between consecutive ticks for `count` ticks over `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    match tick_spec(lo, hi, count as f64) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => 0.0,
    }
}

pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return vec![];
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return vec![];
    };
    if i2 < i1 {
        return vec![];
    }
    let mut ticks: Vec<f64> = (i1..=i2)
        .map(|i| {
            if inc < 0.0 {
                i as f64 / -inc
            } else {
                i as f64 * inc
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

// Returns (first index, last index, increment). A negative increment encodes
// a fractional step as its reciprocal to keep tick values exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(1.0);
    if !(step > 0.0) || !step.is_finite() {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        inc = 10f64.powf(-power) / factor;
        i1 = (start * inc).round() as i64;
        i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start {
            i1 += 1;
        }
        if (i2 as f64) / inc > stop {
            i2 -= 1;
        }
        Some((i1, i2, -inc))
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round() as i64;
        i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
        Some((i1, i2, inc))
    }
}

/// Linear scale whose ticks and labels follow the calendar of a time zone.
/// The domain is in epoch milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeScale {
    pub linear: LinearScale,
    pub tz: Tz,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartScale {
    Linear(LinearScale),
    Time(TimeScale),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self::Linear(Self::build(domain, range))
    }

    pub fn new_time(domain: (f64, f64), range: (f32, f32), tz: Tz) -> Self {
        Self::Time(TimeScale {
            linear: Self::build(domain, range),
            tz,
        })
    }

    fn build(domain: (f64, f64), range: (f32, f32)) -> LinearScale {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        LinearScale::new()
            .with_domain(d_min, d_max)
            .with_range(range.0 as f64, range.1 as f64)
    }

    fn linear(&self) -> &LinearScale {
        match self {
            Self::Linear(s) => s,
            Self::Time(s) => &s.linear,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.linear().scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.linear().invert(pixel as f64)
    }

    pub fn range(&self) -> (f32, f32) {
        let (r0, r1) = self.linear().range();
        (r0 as f32, r1 as f32)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.linear().domain()
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Time(s) => {
                let (d0, d1) = s.linear.domain();
                time_ticks::time_ticks(d0, d1, count, s.tz)
            }
        }
    }

    /// Tick label for `value`. `count` is the tick count the label belongs to,
    /// used to pick the currency precision.
    pub fn format_tick(&self, value: f64, format: &AxisFormat, count: usize) -> String {
        let (d_min, d_max) = self.domain();
        match (format, self) {
            (AxisFormat::Time, Self::Time(s)) => {
                let span_sec = (d_max - d_min).abs() / 1000.0;
                let fmt = date_formatter::determine_date_format(span_sec);
                date_formatter::format_timestamp(value, fmt, s.tz)
            }
            (AxisFormat::Time, Self::Linear(_)) => {
                let span_sec = (d_max - d_min).abs() / 1000.0;
                let fmt = date_formatter::determine_date_format(span_sec);
                date_formatter::format_timestamp(value, fmt, Tz::UTC)
            }
            (AxisFormat::Currency, _) => {
                let step = tick_step(d_min, d_max, count);
                currency::format_currency(value, currency::decimals_for_step(step))
            }
        }
    }
}
