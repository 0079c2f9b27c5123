use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Time granularity of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    Seconds(u32),
    Minutes(u32),
    Hours(u32),
    Days(u32),
    Weeks(u32),
    Months(u32),
}

/// Calendar unit a time-axis tick marks the start of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickGrouping {
    Day,
    Week,
    Month,
    Year,
}

impl Interval {
    /// Grouping rule for adaptive ticks, or `None` when the interval has no
    /// dedicated rule (e.g. 4h or 2D bars).
    #[must_use]
    pub fn tick_grouping(self) -> Option<TickGrouping> {
        match self {
            Self::Seconds(n) | Self::Minutes(n) if n > 0 => Some(TickGrouping::Day),
            Self::Hours(1) => Some(TickGrouping::Day),
            Self::Hours(2 | 3) => Some(TickGrouping::Week),
            Self::Days(1) => Some(TickGrouping::Month),
            Self::Weeks(n) | Self::Months(n) if n > 0 => Some(TickGrouping::Year),
            _ => None,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(n) => write!(f, "{n}s"),
            Self::Minutes(n) => write!(f, "{n}m"),
            Self::Hours(n) => write!(f, "{n}h"),
            Self::Days(n) => write!(f, "{n}D"),
            Self::Weeks(n) => write!(f, "{n}W"),
            Self::Months(n) => write!(f, "{n}M"),
        }
    }
}

/// Parses the compact notation used by exchange feeds: `30s`, `5m`, `1h`,
/// `1D`, `1W`, `1M`. `m` is minutes and `M` is months; day and week units are
/// case-insensitive.
impl FromStr for Interval {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || ChartError::InvalidInterval(input.to_owned());

        let unit = trimmed.chars().last().ok_or_else(invalid)?;
        let digits = &trimmed[..trimmed.len() - unit.len_utf8()];
        let count = if digits.is_empty() {
            1
        } else if digits.bytes().all(|b| b.is_ascii_digit()) {
            digits.parse::<u32>().map_err(|_| invalid())?
        } else {
            return Err(invalid());
        };
        if count == 0 {
            return Err(invalid());
        }

        match unit {
            's' | 'S' => Ok(Self::Seconds(count)),
            'm' => Ok(Self::Minutes(count)),
            'h' | 'H' => Ok(Self::Hours(count)),
            'd' | 'D' => Ok(Self::Days(count)),
            'w' | 'W' => Ok(Self::Weeks(count)),
            'M' => Ok(Self::Months(count)),
            _ => Err(invalid()),
        }
    }
}
