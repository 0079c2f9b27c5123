use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Inclusive-exclusive window of data indices currently scrolled into view.
///
/// Invariant: `from <= to <= bar_count` of the owning store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibleRange {
    pub from: usize,
    pub to: usize,
}

impl VisibleRange {
    #[must_use]
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Number of indices covered by the range; zero when degenerate.
    #[must_use]
    pub fn range(self) -> usize {
        self.to.saturating_sub(self.from)
    }

    /// Last fully visible index, if any.
    #[must_use]
    pub fn real_to(self) -> Option<usize> {
        if self.is_empty() { None } else { Some(self.to - 1) }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.from >= self.to
    }
}

/// Pixel widths allocated per bar at the current zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpace {
    /// Full slot width including the inter-bar gap.
    pub bar: f64,
    pub half_bar: f64,
    /// Drawn body width with the gap removed.
    pub gap_bar: f64,
    pub half_gap_bar: f64,
}

const BAR_BODY_RATIO: f64 = 0.82;

impl BarSpace {
    #[must_use]
    pub fn from_bar_spacing(bar: f64) -> Self {
        let gap_bar = if bar >= 3.0 {
            (bar * BAR_BODY_RATIO).floor()
        } else {
            bar.max(0.0)
        };
        Self {
            bar,
            half_bar: bar / 2.0,
            gap_bar,
            half_gap_bar: gap_bar / 2.0,
        }
    }
}

/// One OHLC record. `timestamp` is Unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRecord {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Week indicator supplied by the feed; tick grouping falls back to the
    /// ISO week of `timestamp` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
}

impl BarRecord {
    /// Builds a validated bar from raw floating values.
    ///
    /// Invariants:
    /// - all prices are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            timestamp,
            open,
            high,
            low,
            close,
            week: None,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated bar.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_millis(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    #[must_use]
    pub fn with_week(mut self, week: u32) -> Self {
        self.week = Some(week);
        self
    }

    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}
