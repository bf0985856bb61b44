use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartDateFormat {
    Year,       // 2024
    MonthYear,  // Jan 2024
    DayMonth,   // 12 Jan
    HourMin,    // 10:30
    HourMinSec, // 10:30:15
    ShortDate,  // 1/12/2024
}

impl SmartDateFormat {
    /// strftime pattern for this format.
    pub const fn pattern(self) -> &'static str {
        match self {
            SmartDateFormat::Year => "%Y",
            SmartDateFormat::MonthYear => "%b %Y",
            SmartDateFormat::DayMonth => "%d %b",
            SmartDateFormat::HourMin => "%H:%M",
            SmartDateFormat::HourMinSec => "%H:%M:%S",
            SmartDateFormat::ShortDate => "%-m/%-d/%Y",
        }
    }
}

/// Determines the best date format based on the visible time range (in seconds).
pub fn determine_date_format(visible_range_sec: f64) -> SmartDateFormat {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;
    const YEAR: f64 = 365.0 * DAY;

    if visible_range_sec > YEAR * 2.0 {
        SmartDateFormat::Year
    } else if visible_range_sec > MONTH * 2.0 {
        SmartDateFormat::MonthYear
    } else if visible_range_sec > DAY * 1.5 {
        SmartDateFormat::DayMonth
    } else if visible_range_sec > MINUTE * 5.0 {
        SmartDateFormat::HourMin
    } else {
        SmartDateFormat::HourMinSec
    }
}

/// Formats an epoch-millisecond timestamp in the given time zone.
pub fn format_timestamp(value_ms: f64, format: SmartDateFormat, tz: Tz) -> String {
    let Some(utc) = DateTime::from_timestamp_millis(value_ms as i64) else {
        return format!("{:.2}", value_ms);
    };
    format_datetime(&tz.from_utc_datetime(&utc.naive_utc()), format)
}

pub fn format_datetime<T: TimeZone>(dt: &DateTime<T>, format: SmartDateFormat) -> String
where
    T::Offset: std::fmt::Display,
{
    dt.format(format.pattern()).to_string()
}

/// Writes a tooltip date ([`SmartDateFormat::ShortDate`]) into `out`, reusing
/// its allocation.
pub fn write_short_date(out: &mut String, value_ms: f64, tz: Tz) {
    use std::fmt::Write;

    out.clear();
    match DateTime::from_timestamp_millis(value_ms as i64) {
        Some(utc) => {
            let local = tz.from_utc_datetime(&utc.naive_utc());
            let _ = write!(out, "{}", local.format(SmartDateFormat::ShortDate.pattern()));
        }
        None => {
            let _ = write!(out, "{:.2}", value_ms);
        }
    }
}
