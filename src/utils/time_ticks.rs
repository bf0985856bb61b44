//! Calendar-aware tick placement for the time axis.
//!
//! Sub-day intervals are fixed durations aligned to the local clock; day and
//! longer intervals land on local midnights (week starts on Sunday, month and
//! year steps start at the first of a month divisible by the step).

use crate::scales::tick_step;
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;

const SECOND: i64 = 1000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Hard cap so a pathological domain can never spin.
const MAX_TICKS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickInterval {
    /// Fixed step in milliseconds, used below one day.
    Fixed(i64),
    Days(u32),
    Week,
    Months(u32),
    Years(i32),
}

impl TickInterval {
    pub fn approx_ms(&self) -> f64 {
        match self {
            Self::Fixed(ms) => *ms as f64,
            Self::Days(n) => (*n as i64 * DAY) as f64,
            Self::Week => WEEK as f64,
            Self::Months(n) => (*n as i64 * MONTH) as f64,
            Self::Years(n) => (*n as i64 * YEAR) as f64,
        }
    }
}

const LADDER: [TickInterval; 18] = [
    TickInterval::Fixed(SECOND),
    TickInterval::Fixed(5 * SECOND),
    TickInterval::Fixed(15 * SECOND),
    TickInterval::Fixed(30 * SECOND),
    TickInterval::Fixed(MINUTE),
    TickInterval::Fixed(5 * MINUTE),
    TickInterval::Fixed(15 * MINUTE),
    TickInterval::Fixed(30 * MINUTE),
    TickInterval::Fixed(HOUR),
    TickInterval::Fixed(3 * HOUR),
    TickInterval::Fixed(6 * HOUR),
    TickInterval::Fixed(12 * HOUR),
    TickInterval::Days(1),
    TickInterval::Days(2),
    TickInterval::Week,
    TickInterval::Months(1),
    TickInterval::Months(3),
    TickInterval::Years(1),
];

/// Picks the ladder interval whose length is closest (by ratio) to
/// `span_ms / count`.
pub fn choose_interval(span_ms: f64, count: usize) -> TickInterval {
    let target = span_ms / count.max(1) as f64;
    if target < SECOND as f64 {
        let step = tick_step(0.0, span_ms, count).max(1.0);
        return TickInterval::Fixed(step.round() as i64);
    }
    match LADDER.iter().position(|i| i.approx_ms() >= target) {
        None => {
            let years = tick_step(0.0, span_ms / YEAR as f64, count).max(1.0);
            TickInterval::Years(years.round() as i32)
        }
        Some(0) => LADDER[0],
        Some(i) => {
            let (lo, hi) = (LADDER[i - 1], LADDER[i]);
            if target / lo.approx_ms() < hi.approx_ms() / target {
                lo
            } else {
                hi
            }
        }
    }
}

/// Tick positions (epoch ms) inside `[start_ms, stop_ms]`, roughly `count` of them.
pub fn time_ticks(start_ms: f64, stop_ms: f64, count: usize, tz: Tz) -> Vec<f64> {
    if count == 0 || !start_ms.is_finite() || !stop_ms.is_finite() {
        return vec![];
    }
    let (lo, hi) = if stop_ms < start_ms {
        (stop_ms, start_ms)
    } else {
        (start_ms, stop_ms)
    };
    if lo == hi {
        return vec![lo];
    }

    let mut ticks = Vec::new();
    let Some(lo_utc) = DateTime::from_timestamp_millis(lo.floor() as i64) else {
        return ticks;
    };

    match choose_interval(hi - lo, count) {
        TickInterval::Fixed(step) => {
            let offset = tz
                .offset_from_utc_datetime(&lo_utc.naive_utc())
                .fix()
                .local_minus_utc() as f64
                * 1000.0;
            let step = step as f64;
            let mut t = ((lo + offset) / step).ceil() * step - offset;
            while t <= hi && ticks.len() < MAX_TICKS {
                ticks.push(t);
                t += step;
            }
        }
        interval => {
            let local_start = tz.from_utc_datetime(&lo_utc.naive_utc()).date_naive();
            let mut date = align(interval, local_start);
            while ticks.len() < MAX_TICKS {
                if let Some(ms) = local_midnight_ms(tz, date) {
                    if ms > hi {
                        break;
                    }
                    if ms >= lo {
                        ticks.push(ms);
                    }
                }
                match advance(interval, date) {
                    Some(next) => date = next,
                    None => break,
                }
            }
        }
    }

    if stop_ms < start_ms {
        ticks.reverse();
    }
    ticks
}

fn align(interval: TickInterval, date: NaiveDate) -> NaiveDate {
    match interval {
        TickInterval::Week => {
            let back = date.weekday().num_days_from_sunday() as u64;
            date.checked_sub_days(Days::new(back)).unwrap_or(date)
        }
        TickInterval::Months(n) => {
            let month0 = date.month0() / n.max(1) * n.max(1);
            NaiveDate::from_ymd_opt(date.year(), month0 + 1, 1).unwrap_or(date)
        }
        TickInterval::Years(n) => {
            let n = n.max(1);
            let year = date.year().div_euclid(n) * n;
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(date)
        }
        TickInterval::Days(_) | TickInterval::Fixed(_) => date,
    }
}

fn advance(interval: TickInterval, date: NaiveDate) -> Option<NaiveDate> {
    match interval {
        TickInterval::Days(n) => date.checked_add_days(Days::new(n.max(1) as u64)),
        TickInterval::Week => date.checked_add_days(Days::new(7)),
        TickInterval::Months(n) => date.checked_add_months(Months::new(n.max(1))),
        TickInterval::Years(n) => NaiveDate::from_ymd_opt(date.year().checked_add(n.max(1))?, 1, 1),
        TickInterval::Fixed(_) => None,
    }
}

// Midnight can be skipped by a DST transition; such days get no tick.
fn local_midnight_ms(tz: Tz, date: NaiveDate) -> Option<f64> {
    let naive = date.and_hms_opt(0, 0, 0)?;
    let local = tz.from_local_datetime(&naive).earliest()?;
    Some(local.timestamp_millis() as f64)
}
