use chart_time_axis::api::{TickParams, TimeAxis, TimeAxisConfig};
use chart_time_axis::core::{
    BarRecord, Interval, TimeScaleOptions, TimeScaleSource, TimeScaleStore,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const MINUTE: i64 = 60_000;
const T0: i64 = 1_735_689_600_000;

fn store_10k(bar_spacing: f64) -> TimeScaleStore {
    let bars: Vec<BarRecord> = (0..10_000)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.05;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = base.min(close) - 0.75;
            let high = base.max(close) + 0.75;
            BarRecord::new(T0 + i as i64 * MINUTE, base, high, low, close)
                .expect("valid generated bar")
        })
        .collect();
    let options = TimeScaleOptions {
        bar_spacing,
        ..TimeScaleOptions::default()
    };
    let mut store = TimeScaleStore::new(1920.0, options).expect("store");
    store.set_bars(bars).expect("bars");
    store
}

fn bench_adaptive_ticks_10k(c: &mut Criterion) {
    let mut store = store_10k(8.0);
    store.fit_content().expect("fit");
    let axis = TimeAxis::new(&store, TimeAxisConfig::default());

    c.bench_function("adaptive_ticks_10k", |b| {
        b.iter(|| {
            let ticks = axis.create_ticks(black_box(TickParams::adaptive(Interval::Minutes(1))));
            black_box(ticks);
        })
    });
}

fn bench_density_ticks_10k(c: &mut Criterion) {
    let mut store = store_10k(8.0);
    store.fit_content().expect("fit");
    let axis = TimeAxis::new(&store, TimeAxisConfig::default());

    c.bench_function("density_ticks_10k", |b| {
        b.iter(|| {
            let ticks = axis.create_ticks(black_box(TickParams::density(Interval::Minutes(1))));
            black_box(ticks);
        })
    });
}

fn bench_pixel_timestamp_round_trip(c: &mut Criterion) {
    let store = store_10k(8.0);
    let axis = TimeAxis::new(&store, TimeAxisConfig::default());
    let range = store.visible_range();
    let mid = (range.from + range.to) / 2;

    c.bench_function("pixel_timestamp_round_trip", |b| {
        b.iter(|| {
            let pixel = axis.convert_to_pixel(black_box(mid as i64));
            let timestamp = axis
                .convert_timestamp_from_pixel(pixel)
                .expect("visible bar");
            let _ = axis.convert_timestamp_to_pixel(black_box(timestamp));
        })
    });
}

criterion_group!(
    benches,
    bench_adaptive_ticks_10k,
    bench_density_ticks_10k,
    bench_pixel_timestamp_round_trip
);
criterion_main!(benches);
