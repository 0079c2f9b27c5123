use serde::{Deserialize, Serialize};

use crate::core::{BarRecord, BarSpace, Interval, VisibleRange};

use super::{CoordinateMapper, TickFont, TimeAxisLabelConfig};

/// Labeled mark on the time axis. `value` is the bar timestamp in Unix
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTick {
    pub text: String,
    pub coord: f64,
    pub value: i64,
}

/// Built-in tick selection algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TickMode {
    /// One tick per calendar group chosen from the interval.
    #[default]
    Adaptive,
    /// Every visible bar thinned to avoid label overlap.
    Density,
}

/// Per-call tick request; the interval is always passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickParams {
    pub interval: Interval,
    pub mode: TickMode,
}

impl TickParams {
    #[must_use]
    pub fn adaptive(interval: Interval) -> Self {
        Self {
            interval,
            mode: TickMode::Adaptive,
        }
    }

    #[must_use]
    pub fn density(interval: Interval) -> Self {
        Self {
            interval,
            mode: TickMode::Density,
        }
    }
}

/// Read-only inputs handed to tick generators.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    mapper: CoordinateMapper<'a>,
    interval: Interval,
    label: TimeAxisLabelConfig,
    font: &'a TickFont,
}

impl<'a> TickContext<'a> {
    #[must_use]
    pub fn new(
        mapper: CoordinateMapper<'a>,
        interval: Interval,
        label: TimeAxisLabelConfig,
        font: &'a TickFont,
    ) -> Self {
        Self {
            mapper,
            interval,
            label,
            font,
        }
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper<'a> {
        self.mapper
    }

    #[must_use]
    pub fn bars(&self) -> &'a [BarRecord] {
        self.mapper.bars()
    }

    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        self.mapper.visible_range()
    }

    #[must_use]
    pub fn bar_space(&self) -> BarSpace {
        self.mapper.bar_space()
    }

    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    #[must_use]
    pub fn label_config(&self) -> TimeAxisLabelConfig {
        self.label
    }

    #[must_use]
    pub fn tick_font(&self) -> &'a TickFont {
        self.font
    }

    #[must_use]
    pub fn data_index_to_pixel(&self, index: usize) -> f64 {
        self.mapper.data_index_to_pixel(index as i64)
    }
}

/// Caller-supplied replacement for the built-in tick algorithms.
///
/// Implemented for any `Fn(&TickContext<'_>) -> Vec<TimeTick>` closure.
pub trait TimeTickStrategy: Send + Sync {
    fn create_ticks(&self, ctx: &TickContext<'_>) -> Vec<TimeTick>;
}

impl<F> TimeTickStrategy for F
where
    F: Fn(&TickContext<'_>) -> Vec<TimeTick> + Send + Sync,
{
    fn create_ticks(&self, ctx: &TickContext<'_>) -> Vec<TimeTick> {
        self(ctx)
    }
}
