use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::TimeScaleSource;

use super::axis_time_axis_height_estimator::estimate_required_time_axis_height;
use super::json_contract::TimeTickSnapshot;
use super::time_tick_density::density_ticks;
use super::time_tick_grouping::group_ticks;
use super::time_tick_label_collapse::collapse_first_tick_label;
use super::{
    CoordinateMapper, EstimatedTextMeasurer, TextMeasurer, TickContext, TickMode, TickParams,
    TimeAxisConfig, TimeTick, TimeTickStrategy, UnrecognizedIntervalPolicy,
};

/// Time axis of one chart: pixel conversions, tick labels and band height.
///
/// Holds a shared borrow of its time-scale source, so an axis is built per
/// redraw pass and dropped before the host mutates pan/zoom state again.
pub struct TimeAxis<'a> {
    mapper: CoordinateMapper<'a>,
    config: TimeAxisConfig,
    strategy: Option<Arc<dyn TimeTickStrategy>>,
    measurer: Arc<dyn TextMeasurer>,
}

impl<'a> TimeAxis<'a> {
    #[must_use]
    pub fn new(source: &'a dyn TimeScaleSource, config: TimeAxisConfig) -> Self {
        Self {
            mapper: CoordinateMapper::new(source),
            config,
            strategy: None,
            measurer: Arc::new(EstimatedTextMeasurer),
        }
    }

    /// Replaces the built-in tick algorithms. Custom output is returned as-is,
    /// without first-tick label collapsing.
    #[must_use]
    pub fn with_tick_strategy(mut self, strategy: Arc<dyn TimeTickStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    #[must_use]
    pub fn with_text_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    #[must_use]
    pub fn config(&self) -> &TimeAxisConfig {
        &self.config
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper<'a> {
        self.mapper
    }

    #[must_use]
    pub fn convert_to_pixel(&self, data_index: i64) -> f64 {
        self.mapper.data_index_to_pixel(data_index)
    }

    #[must_use]
    pub fn convert_from_pixel(&self, pixel: f64) -> Option<usize> {
        self.mapper.pixel_to_data_index(pixel)
    }

    #[must_use]
    pub fn convert_timestamp_to_pixel(&self, timestamp_ms: i64) -> Option<f64> {
        self.mapper.timestamp_to_pixel(timestamp_ms)
    }

    #[must_use]
    pub fn convert_timestamp_from_pixel(&self, pixel: f64) -> Option<i64> {
        self.mapper.pixel_to_timestamp(pixel)
    }

    /// Builds the tick list for the current visible range.
    ///
    /// Empty data or an empty visible range yield no ticks.
    #[must_use]
    pub fn create_ticks(&self, params: TickParams) -> Vec<TimeTick> {
        let ctx = TickContext::new(
            self.mapper,
            params.interval,
            self.config.label,
            &self.config.style.tick_text.font,
        );

        if let Some(strategy) = &self.strategy {
            let ticks = strategy.create_ticks(&ctx);
            trace!(count = ticks.len(), interval = %params.interval, "custom time ticks");
            return ticks;
        }

        let mut ticks = match params.mode {
            TickMode::Density => density_ticks(&ctx, self.measurer.as_ref()),
            TickMode::Adaptive => match params.interval.tick_grouping() {
                Some(grouping) => group_ticks(&ctx, grouping),
                None => self.unrecognized_interval_ticks(&ctx),
            },
        };
        collapse_first_tick_label(&mut ticks, self.config.label);

        trace!(
            count = ticks.len(),
            interval = %params.interval,
            mode = ?params.mode,
            "created time ticks"
        );
        ticks
    }

    /// Same ticks as [`create_ticks`](Self::create_ticks), wrapped for JSON export.
    #[must_use]
    pub fn tick_snapshot(&self, params: TickParams) -> TimeTickSnapshot {
        TimeTickSnapshot {
            interval: params.interval.to_string(),
            ticks: self.create_ticks(params),
        }
    }

    /// Pixel height the axis band needs under the current style.
    #[must_use]
    pub fn auto_size(&self) -> f64 {
        estimate_required_time_axis_height(&self.config.style, &self.config.crosshair)
    }

    fn unrecognized_interval_ticks(&self, ctx: &TickContext<'_>) -> Vec<TimeTick> {
        match self.config.unrecognized_interval {
            UnrecognizedIntervalPolicy::DensityFallback => {
                debug!(
                    interval = %ctx.interval(),
                    "no tick grouping for interval, using density ticks"
                );
                density_ticks(ctx, self.measurer.as_ref())
            }
            UnrecognizedIntervalPolicy::Empty => {
                debug!(
                    interval = %ctx.interval(),
                    "no tick grouping for interval, skipping ticks"
                );
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for TimeAxis<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeAxis")
            .field("mapper", &self.mapper)
            .field("config", &self.config)
            .field("custom_strategy", &self.strategy.is_some())
            .finish()
    }
}
