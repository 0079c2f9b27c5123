use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Locale preset used by time-axis label formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
}

/// Timezone in which calendar fields of bar timestamps are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeAxisTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl TimeAxisTimeZone {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    /// Offsets beyond +/-24h fall back to UTC.
    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimeAxisLabelConfig {
    pub locale: AxisLabelLocale,
    pub timezone: TimeAxisTimeZone,
}

/// Height policy of the time-axis band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum AxisSize {
    #[default]
    Auto,
    Fixed(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLineStyle {
    pub show: bool,
    pub size: f64,
}

impl Default for AxisLineStyle {
    fn default() -> Self {
        Self {
            show: true,
            size: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickLineStyle {
    pub show: bool,
    pub length: f64,
}

impl Default for TickLineStyle {
    fn default() -> Self {
        Self {
            show: true,
            length: 3.0,
        }
    }
}

/// Font used to render and measure tick labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickFont {
    pub size: f64,
    pub weight: u16,
    pub family: String,
}

impl Default for TickFont {
    fn default() -> Self {
        Self {
            size: 12.0,
            weight: 400,
            family: "Helvetica Neue".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickTextStyle {
    pub show: bool,
    pub font: TickFont,
    pub margin_start: f64,
    pub margin_end: f64,
}

impl Default for TickTextStyle {
    fn default() -> Self {
        Self {
            show: true,
            font: TickFont::default(),
            margin_start: 4.0,
            margin_end: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeAxisStyle {
    pub show: bool,
    pub size: AxisSize,
    pub axis_line: AxisLineStyle,
    pub tick_line: TickLineStyle,
    pub tick_text: TickTextStyle,
}

impl Default for TimeAxisStyle {
    fn default() -> Self {
        Self {
            show: true,
            size: AxisSize::Auto,
            axis_line: AxisLineStyle::default(),
            tick_line: TickLineStyle::default(),
            tick_text: TickTextStyle::default(),
        }
    }
}

/// Label box drawn on the time axis under the crosshair's vertical line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairLabelStyle {
    pub show: bool,
    pub size: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub border_size: f64,
}

impl Default for CrosshairLabelStyle {
    fn default() -> Self {
        Self {
            show: true,
            size: 12.0,
            padding_top: 2.0,
            padding_bottom: 2.0,
            border_size: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairVerticalStyle {
    pub show: bool,
    pub text: CrosshairLabelStyle,
}

impl Default for CrosshairVerticalStyle {
    fn default() -> Self {
        Self {
            show: true,
            text: CrosshairLabelStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairStyle {
    pub show: bool,
    pub vertical: CrosshairVerticalStyle,
}

impl Default for CrosshairStyle {
    fn default() -> Self {
        Self {
            show: true,
            vertical: CrosshairVerticalStyle::default(),
        }
    }
}

/// What adaptive tick generation does for an interval without a grouping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnrecognizedIntervalPolicy {
    /// Fall back to density-reduced ticks.
    #[default]
    DensityFallback,
    /// Produce no ticks.
    Empty,
}

/// Full runtime configuration of a time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TimeAxisConfig {
    pub label: TimeAxisLabelConfig,
    pub style: TimeAxisStyle,
    pub crosshair: CrosshairStyle,
    pub unrecognized_interval: UnrecognizedIntervalPolicy,
}

impl TimeAxisConfig {
    #[must_use]
    pub fn with_label_config(mut self, label: TimeAxisLabelConfig) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: TimeAxisStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_crosshair(mut self, crosshair: CrosshairStyle) -> Self {
        self.crosshair = crosshair;
        self
    }

    #[must_use]
    pub fn with_unrecognized_interval(mut self, policy: UnrecognizedIntervalPolicy) -> Self {
        self.unrecognized_interval = policy;
        self
    }

    /// Parses a config document; omitted fields keep their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse time axis config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize time axis config: {e}"))
        })
    }

    fn validate(self) -> ChartResult<Self> {
        let style = &self.style;
        let crosshair_label = &self.crosshair.vertical.text;
        let lengths = [
            ("axis_line.size", style.axis_line.size),
            ("tick_line.length", style.tick_line.length),
            ("tick_text.font.size", style.tick_text.font.size),
            ("tick_text.margin_start", style.tick_text.margin_start),
            ("tick_text.margin_end", style.tick_text.margin_end),
            ("crosshair.vertical.text.size", crosshair_label.size),
            ("crosshair.vertical.text.padding_top", crosshair_label.padding_top),
            ("crosshair.vertical.text.padding_bottom", crosshair_label.padding_bottom),
            ("crosshair.vertical.text.border_size", crosshair_label.border_size),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if let AxisSize::Fixed(height) = style.size
            && (!height.is_finite() || height < 0.0)
        {
            return Err(ChartError::InvalidConfig(
                "fixed axis size must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}
