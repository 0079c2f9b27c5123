use chart_time_axis::api::CoordinateMapper;
use chart_time_axis::core::{BarRecord, TimeScaleOptions, TimeScaleStore};
use proptest::prelude::*;

fn store(count: usize, width: f64, bar_spacing: f64, right_offset: f64) -> TimeScaleStore {
    let options = TimeScaleOptions {
        bar_spacing,
        right_offset,
        ..TimeScaleOptions::default()
    };
    let mut store = TimeScaleStore::new(width, options).expect("valid store");
    let bars = (0..count)
        .map(|i| BarRecord::new(i as i64 * 60_000, 1.0, 2.0, 0.5, 1.5).expect("valid bar"))
        .collect();
    store.set_bars(bars).expect("sorted bars");
    store
}

proptest! {
    #[test]
    fn pixel_round_trip_recovers_visible_indices(
        count in 1usize..600,
        width in 50.0f64..2_500.0,
        bar_spacing in 1.0f64..50.0,
        right_offset in -40.0f64..40.0,
    ) {
        let store = store(count, width, bar_spacing, right_offset);
        let mapper = CoordinateMapper::new(&store);
        let range = mapper.visible_range();
        prop_assert!(range.from <= range.to && range.to <= count);

        for index in range.from..range.to {
            let pixel = mapper.data_index_to_pixel(index as i64);
            prop_assert_eq!(mapper.pixel_to_data_index(pixel), Some(index));
        }
    }

    #[test]
    fn data_index_to_pixel_is_strictly_increasing(
        count in 2usize..600,
        width in 50.0f64..2_500.0,
        bar_spacing in 1.0f64..50.0,
        right_offset in -40.0f64..40.0,
    ) {
        let store = store(count, width, bar_spacing, right_offset);
        let mapper = CoordinateMapper::new(&store);

        for index in 0..(count as i64 - 1) {
            prop_assert!(mapper.data_index_to_pixel(index) < mapper.data_index_to_pixel(index + 1));
        }
    }
}
