//! chart-time-axis: time-axis coordinate engine for candlestick charts.
//!
//! `core` holds bar data and the pan/zoom time scale; `api` maps between
//! data indices, timestamps and pixels and builds adaptive tick labels on top
//! of any [`core::TimeScaleSource`].

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{TimeAxis, TimeAxisConfig, TimeTick};
pub use error::{ChartError, ChartResult};
