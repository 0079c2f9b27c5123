pub mod interval;
pub mod primitives;
pub mod time_scale;
pub mod types;

pub use interval::{Interval, TickGrouping};
pub use time_scale::{TimeScaleOptions, TimeScaleSource, TimeScaleStore};
pub use types::{BarRecord, BarSpace, VisibleRange};
