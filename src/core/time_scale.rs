use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{BarRecord, BarSpace, VisibleRange};
use crate::error::{ChartError, ChartResult};

/// Read-only view of the pan/zoom state and bar data the time axis works on.
///
/// Hosts with their own chart store implement the five required methods; the
/// lookups by index and timestamp are derived from `bars()`.
pub trait TimeScaleSource {
    fn bars(&self) -> &[BarRecord];

    fn visible_range(&self) -> VisibleRange;

    fn bar_space(&self) -> BarSpace;

    /// Pixel x of the bar center at `index`. Defined for indices outside the
    /// data too (e.g. the right-offset area).
    fn data_index_to_coordinate(&self, index: i64) -> f64;

    /// Continuous index at pixel `x`; bar `i` spans `(i - 1, i]`.
    fn coordinate_to_float_index(&self, x: f64) -> f64;

    fn bar(&self, index: usize) -> Option<&BarRecord> {
        self.bars().get(index)
    }

    /// Index of the bar whose slot contains `x`, or `None` when no bar does.
    fn coordinate_to_data_index(&self, x: f64) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }
        let index = self.coordinate_to_float_index(x).ceil();
        if !index.is_finite() || index < 0.0 {
            return None;
        }
        let index = index as usize;
        (index < self.bars().len()).then_some(index)
    }

    fn data_index_to_timestamp(&self, index: usize) -> Option<i64> {
        self.bar(index).map(|bar| bar.timestamp)
    }

    /// Index of the bar at `timestamp`, or of the last bar starting before it.
    ///
    /// Returns `None` when the timestamp lies outside the data.
    fn timestamp_to_data_index(&self, timestamp: i64) -> Option<usize> {
        let bars = self.bars();
        let first = bars.first()?;
        let last = bars.last()?;
        if timestamp < first.timestamp || timestamp > last.timestamp {
            return None;
        }
        let after = bars.partition_point(|bar| bar.timestamp <= timestamp);
        Some(after.saturating_sub(1))
    }
}

/// Tuning controls for the time scale pan/zoom state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScaleOptions {
    pub bar_spacing: f64,
    pub min_bar_spacing: f64,
    pub max_bar_spacing: f64,
    /// Empty bars kept to the right of the last bar.
    pub right_offset: f64,
}

impl Default for TimeScaleOptions {
    fn default() -> Self {
        Self {
            bar_spacing: 8.0,
            min_bar_spacing: 1.0,
            max_bar_spacing: 50.0,
            right_offset: 0.0,
        }
    }
}

impl TimeScaleOptions {
    fn validate(self) -> ChartResult<Self> {
        if !self.min_bar_spacing.is_finite() || self.min_bar_spacing <= 0.0 {
            return Err(ChartError::InvalidData(
                "min bar spacing must be finite and > 0".to_owned(),
            ));
        }
        if !self.max_bar_spacing.is_finite() || self.max_bar_spacing < self.min_bar_spacing {
            return Err(ChartError::InvalidData(
                "max bar spacing must be finite and >= min bar spacing".to_owned(),
            ));
        }
        if !self.bar_spacing.is_finite() || self.bar_spacing <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar spacing must be finite and > 0".to_owned(),
            ));
        }
        if !self.right_offset.is_finite() {
            return Err(ChartError::InvalidData(
                "right offset must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// In-memory time scale: bar data plus pan/zoom state.
///
/// Coordinates follow the right-anchored model: the last bar sits
/// `right_offset` bars left of the axis' right edge and every other bar is
/// laid out leftwards at `bar_spacing` pixels.
#[derive(Debug, Clone)]
pub struct TimeScaleStore {
    options: TimeScaleOptions,
    width: f64,
    bar_spacing: f64,
    right_offset: f64,
    bars: Vec<BarRecord>,
}

impl TimeScaleStore {
    pub fn new(width: f64, options: TimeScaleOptions) -> ChartResult<Self> {
        let options = options.validate()?;
        let mut store = Self {
            width: 0.0,
            bar_spacing: options.bar_spacing,
            right_offset: options.right_offset,
            bars: Vec::new(),
            options,
        };
        store.set_width(width)?;
        store.bar_spacing = store.clamp_bar_spacing(options.bar_spacing);
        Ok(store)
    }

    /// Builds a store showing `bars` with default options.
    pub fn with_bars(width: f64, bars: Vec<BarRecord>) -> ChartResult<Self> {
        let mut store = Self::new(width, TimeScaleOptions::default())?;
        store.set_bars(bars)?;
        Ok(store)
    }

    #[must_use]
    pub fn options(&self) -> TimeScaleOptions {
        self.options
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) -> ChartResult<()> {
        if !width.is_finite() || width <= 0.0 {
            warn!(width, "rejecting time scale width");
            return Err(ChartError::InvalidData(
                "time scale width must be finite and > 0".to_owned(),
            ));
        }
        self.width = width;
        Ok(())
    }

    /// Replaces the bar data. Timestamps must be strictly increasing.
    pub fn set_bars(&mut self, bars: Vec<BarRecord>) -> ChartResult<()> {
        if let Some(position) = bars
            .windows(2)
            .position(|pair| pair[1].timestamp <= pair[0].timestamp)
        {
            warn!(
                position = position + 1,
                "rejecting bars with non-increasing timestamps"
            );
            return Err(ChartError::InvalidData(format!(
                "bar timestamps must be strictly increasing (index {})",
                position + 1
            )));
        }
        debug!(count = bars.len(), "set time scale bars");
        self.bars = bars;
        Ok(())
    }

    /// Appends a bar newer than the current last bar, or replaces the last
    /// bar when the timestamps are equal.
    pub fn update_bar(&mut self, bar: BarRecord) -> ChartResult<()> {
        match self.bars.last_mut() {
            Some(last) if bar.timestamp < last.timestamp => {
                warn!(
                    timestamp = bar.timestamp,
                    last_timestamp = last.timestamp,
                    "rejecting out-of-order bar update"
                );
                Err(ChartError::InvalidData(
                    "bar update is older than the last bar".to_owned(),
                ))
            }
            Some(last) if bar.timestamp == last.timestamp => {
                *last = bar;
                trace!(count = self.bars.len(), "replace last bar");
                Ok(())
            }
            _ => {
                self.bars.push(bar);
                trace!(count = self.bars.len(), "append bar");
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn bar_spacing(&self) -> f64 {
        self.bar_spacing
    }

    /// Sets bar spacing, clamped into `[min_bar_spacing, max_bar_spacing]`.
    pub fn set_bar_spacing(&mut self, bar_spacing: f64) -> ChartResult<()> {
        if !bar_spacing.is_finite() || bar_spacing <= 0.0 {
            warn!(bar_spacing, "rejecting bar spacing");
            return Err(ChartError::InvalidData(
                "bar spacing must be finite and > 0".to_owned(),
            ));
        }
        self.bar_spacing = self.clamp_bar_spacing(bar_spacing);
        Ok(())
    }

    #[must_use]
    pub fn right_offset(&self) -> f64 {
        self.right_offset
    }

    pub fn set_right_offset(&mut self, right_offset: f64) -> ChartResult<()> {
        if !right_offset.is_finite() {
            return Err(ChartError::InvalidData(
                "time scale right offset must be finite".to_owned(),
            ));
        }
        self.right_offset = right_offset;
        Ok(())
    }

    /// Pans by a pixel delta; positive values move the content to the right.
    pub fn scroll_by_pixels(&mut self, delta_px: f64) -> ChartResult<()> {
        if !delta_px.is_finite() {
            return Err(ChartError::InvalidData(
                "scroll delta must be finite".to_owned(),
            ));
        }
        self.set_right_offset(self.right_offset - delta_px / self.bar_spacing)
    }

    /// Zooms around `zoom_point` keeping the index under it fixed.
    ///
    /// `scale > 0` zooms in, `scale < 0` zooms out; each unit changes bar
    /// spacing by a tenth.
    pub fn zoom(&mut self, zoom_point: f64, scale: f64) -> ChartResult<()> {
        if !zoom_point.is_finite() || !scale.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom point and scale must be finite".to_owned(),
            ));
        }
        if self.bars.is_empty() || scale == 0.0 {
            return Ok(());
        }
        let zoom_point = zoom_point.clamp(0.0, self.width);
        let anchor_index = self.coordinate_to_float_index(zoom_point);
        let target = self.bar_spacing + scale * (self.bar_spacing / 10.0);
        self.set_bar_spacing(target.max(f64::MIN_POSITIVE))?;
        let corrected =
            self.right_offset + (anchor_index - self.coordinate_to_float_index(zoom_point));
        self.set_right_offset(corrected)
    }

    /// Fits all bars into the width, respecting the bar spacing clamps.
    pub fn fit_content(&mut self) -> ChartResult<()> {
        if self.bars.is_empty() {
            return Ok(());
        }
        let slots = self.bars.len() as f64 + self.options.right_offset;
        self.set_bar_spacing(self.width / slots.max(1.0))?;
        self.set_right_offset(self.options.right_offset)
    }

    fn base_index(&self) -> f64 {
        self.bars.len() as f64 - 1.0
    }

    fn clamp_bar_spacing(&self, bar_spacing: f64) -> f64 {
        bar_spacing.clamp(self.options.min_bar_spacing, self.options.max_bar_spacing)
    }
}

impl TimeScaleSource for TimeScaleStore {
    fn bars(&self) -> &[BarRecord] {
        &self.bars
    }

    fn visible_range(&self) -> VisibleRange {
        let count = self.bars.len() as f64;
        let clamp = |index: f64| -> usize {
            if index.is_finite() {
                index.clamp(0.0, count) as usize
            } else {
                0
            }
        };
        let from = clamp(self.coordinate_to_float_index(0.0).ceil());
        let to = clamp(self.coordinate_to_float_index(self.width).ceil() + 1.0);
        VisibleRange::new(from.min(to), to)
    }

    fn bar_space(&self) -> BarSpace {
        BarSpace::from_bar_spacing(self.bar_spacing)
    }

    fn data_index_to_coordinate(&self, index: i64) -> f64 {
        let delta_from_right = self.base_index() + self.right_offset - index as f64;
        self.width - (delta_from_right + 0.5) * self.bar_spacing - 1.0
    }

    fn coordinate_to_float_index(&self, x: f64) -> f64 {
        let delta_from_right = (self.width - 1.0 - x) / self.bar_spacing;
        let index = self.base_index() + self.right_offset - delta_from_right;
        (index * 1_000_000.0).round() / 1_000_000.0
    }
}
