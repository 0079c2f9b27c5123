mod axis_config;
mod axis_ticks;
mod axis_time_axis_height_estimator;
mod coordinate_mapper;
mod json_contract;
mod text_measure;
mod time_axis;
mod time_label_format;
mod time_tick;
mod time_tick_density;
mod time_tick_grouping;
mod time_tick_label_collapse;

pub use axis_config::{
    AxisLabelLocale, AxisLineStyle, AxisSize, CrosshairLabelStyle, CrosshairStyle,
    CrosshairVerticalStyle, TickFont, TickLineStyle, TickTextStyle, TimeAxisConfig,
    TimeAxisLabelConfig, TimeAxisStyle, TimeAxisTimeZone, UnrecognizedIntervalPolicy,
};
pub use coordinate_mapper::CoordinateMapper;
pub use json_contract::{TIME_TICKS_JSON_SCHEMA_V1, TimeTickSnapshot, TimeTicksJsonContractV1};
pub use text_measure::{EstimatedTextMeasurer, TextMeasurer};
pub use time_axis::TimeAxis;
pub use time_label_format::{
    TimeLabelPattern, calendar_change_label, format_time_label, month_abbreviation,
};
pub use time_tick::{TickContext, TickMode, TickParams, TimeTick, TimeTickStrategy};
pub use time_tick_density::density_ticks;
pub use time_tick_grouping::group_ticks;
pub use time_tick_label_collapse::collapse_first_tick_label;
