use crate::core::{BarRecord, BarSpace, TimeScaleSource, VisibleRange};

/// Conversions between data-index, timestamp and pixel spaces.
///
/// The mapper only reads its source, so a borrowed store stays untouched for
/// the whole redraw pass. Lookups that fall outside the data return `None`:
///
/// - `data_index_to_pixel` is defined for every index, including the empty
///   right-offset area, and is strictly increasing in the index;
/// - `pixel_to_data_index` only resolves pixels inside an existing bar's slot;
/// - `timestamp_to_data_index` resolves timestamps between the first and last
///   bar, snapping to the bar at or before the timestamp.
#[derive(Clone, Copy)]
pub struct CoordinateMapper<'a> {
    source: &'a dyn TimeScaleSource,
}

impl<'a> CoordinateMapper<'a> {
    #[must_use]
    pub fn new(source: &'a dyn TimeScaleSource) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn bars(&self) -> &'a [BarRecord] {
        self.source.bars()
    }

    /// Visible range clamped to the bar count.
    #[must_use]
    pub fn visible_range(&self) -> VisibleRange {
        let range = self.source.visible_range();
        let count = self.bars().len();
        VisibleRange::new(range.from.min(count), range.to.min(count))
    }

    #[must_use]
    pub fn bar_space(&self) -> BarSpace {
        self.source.bar_space()
    }

    #[must_use]
    pub fn pixel_to_data_index(&self, pixel: f64) -> Option<usize> {
        self.source.coordinate_to_data_index(pixel)
    }

    #[must_use]
    pub fn data_index_to_pixel(&self, index: i64) -> f64 {
        self.source.data_index_to_coordinate(index)
    }

    #[must_use]
    pub fn timestamp_to_data_index(&self, timestamp_ms: i64) -> Option<usize> {
        self.source.timestamp_to_data_index(timestamp_ms)
    }

    #[must_use]
    pub fn data_index_to_timestamp(&self, index: usize) -> Option<i64> {
        self.source.data_index_to_timestamp(index)
    }

    #[must_use]
    pub fn pixel_to_timestamp(&self, pixel: f64) -> Option<i64> {
        self.pixel_to_data_index(pixel)
            .and_then(|index| self.data_index_to_timestamp(index))
    }

    #[must_use]
    pub fn timestamp_to_pixel(&self, timestamp_ms: i64) -> Option<f64> {
        self.timestamp_to_data_index(timestamp_ms)
            .map(|index| self.data_index_to_pixel(index as i64))
    }
}

impl std::fmt::Debug for CoordinateMapper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinateMapper")
            .field("bars", &self.bars().len())
            .field("visible_range", &self.visible_range())
            .finish()
    }
}
