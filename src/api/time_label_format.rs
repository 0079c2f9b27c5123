use chrono::{DateTime, Datelike, FixedOffset};

use crate::core::primitives::unix_millis_to_local;

use super::{AxisLabelLocale, TimeAxisLabelConfig};

/// Fixed numeric patterns used by time-axis tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeLabelPattern {
    /// `HH:mm`
    HourMinute,
    /// `MM-DD`
    MonthDay,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY`
    Year,
    /// `YYYY-MM-DD HH:mm`
    DateMinute,
}

impl TimeLabelPattern {
    fn strftime(self) -> &'static str {
        match self {
            Self::HourMinute => "%H:%M",
            Self::MonthDay => "%m-%d",
            Self::YearMonth => "%Y-%m",
            Self::Year => "%Y",
            Self::DateMinute => "%Y-%m-%d %H:%M",
        }
    }

    /// Recognizes label text produced by one of the date patterns.
    ///
    /// Only `MM-DD`, `YYYY-MM` and `YYYY` are detected; anything else,
    /// including month names, returns `None`.
    #[must_use]
    pub fn classify(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let digits = |range: &[u8]| range.iter().all(u8::is_ascii_digit);
        match bytes.len() {
            4 if digits(bytes) => Some(Self::Year),
            5 if bytes[2] == b'-' && digits(&bytes[..2]) && digits(&bytes[3..]) => {
                Some(Self::MonthDay)
            }
            7 if bytes[4] == b'-' && digits(&bytes[..4]) && digits(&bytes[5..]) => {
                Some(Self::YearMonth)
            }
            _ => None,
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Abbreviated month name for a 1-based month.
#[must_use]
pub fn month_abbreviation(month: u32, locale: AxisLabelLocale) -> &'static str {
    let table = match locale {
        AxisLabelLocale::EnUs => &MONTHS_EN,
        AxisLabelLocale::EsEs => &MONTHS_ES,
    };
    let index = (month.clamp(1, 12) - 1) as usize;
    table[index]
}

pub(super) fn local_datetime(
    timestamp_ms: i64,
    config: TimeAxisLabelConfig,
) -> Option<DateTime<FixedOffset>> {
    unix_millis_to_local(timestamp_ms, config.timezone.fixed_offset())
}

/// Formats a Unix-millisecond timestamp in the configured timezone.
///
/// Timestamps chrono cannot represent render as the raw millisecond value.
#[must_use]
pub fn format_time_label(
    timestamp_ms: i64,
    pattern: TimeLabelPattern,
    config: TimeAxisLabelConfig,
) -> String {
    match local_datetime(timestamp_ms, config) {
        Some(local) => local.format(pattern.strftime()).to_string(),
        None => timestamp_ms.to_string(),
    }
}

/// Label naming the most significant calendar field in which `timestamp`
/// differs from `previous`: the year, else year-month, else month-day.
///
/// Returns `None` when both fall on the same day.
#[must_use]
pub fn calendar_change_label(
    timestamp_ms: i64,
    previous_ms: i64,
    config: TimeAxisLabelConfig,
) -> Option<String> {
    let current = local_datetime(timestamp_ms, config)?;
    let previous = local_datetime(previous_ms, config)?;
    let pattern = if current.year() != previous.year() {
        TimeLabelPattern::Year
    } else if current.month() != previous.month() {
        TimeLabelPattern::YearMonth
    } else if current.day() != previous.day() {
        TimeLabelPattern::MonthDay
    } else {
        return None;
    };
    Some(current.format(pattern.strftime()).to_string())
}
