use std::sync::Arc;

use chart_time_axis::ChartError;
use chart_time_axis::api::{
    AxisSize, CrosshairStyle, TickContext, TickMode, TickParams, TimeAxis, TimeAxisConfig,
    TimeAxisStyle, TimeTick, TimeTickSnapshot, TimeTickStrategy, UnrecognizedIntervalPolicy,
};
use chart_time_axis::core::{BarRecord, Interval, TimeScaleOptions, TimeScaleSource, TimeScaleStore};

const HOUR: i64 = 3_600_000;
const T0: i64 = 1_735_689_600_000; // 2025-01-01 00:00 UTC

const ALL_INTERVALS: [Interval; 10] = [
    Interval::Seconds(30),
    Interval::Minutes(1),
    Interval::Minutes(15),
    Interval::Hours(1),
    Interval::Hours(2),
    Interval::Hours(3),
    Interval::Hours(4),
    Interval::Days(1),
    Interval::Weeks(1),
    Interval::Months(1),
];

fn hourly_store(count: usize) -> TimeScaleStore {
    let bars = (0..count)
        .map(|i| BarRecord::new(T0 + i as i64 * HOUR, 1.0, 2.0, 0.5, 1.5).expect("valid bar"))
        .collect();
    TimeScaleStore::with_bars(800.0, bars).expect("store")
}

#[test]
fn empty_data_yields_no_ticks_for_every_interval_and_mode() {
    let store = TimeScaleStore::new(800.0, TimeScaleOptions::default()).expect("store");
    let axis = TimeAxis::new(&store, TimeAxisConfig::default());

    for interval in ALL_INTERVALS {
        for mode in [TickMode::Adaptive, TickMode::Density] {
            let ticks = axis.create_ticks(TickParams { interval, mode });
            assert!(ticks.is_empty(), "{interval} {mode:?}");
        }
    }
}

#[test]
fn range_scrolled_past_the_data_yields_no_ticks() {
    let mut store = hourly_store(48);
    store.set_right_offset(-500.0).expect("offset");
    assert!(store.visible_range().is_empty());

    let axis = TimeAxis::new(&store, TimeAxisConfig::default());
    for interval in ALL_INTERVALS {
        assert!(axis.create_ticks(TickParams::adaptive(interval)).is_empty());
    }
}

#[test]
fn unrecognized_interval_falls_back_to_density_ticks_by_default() {
    let store = hourly_store(72);
    let axis = TimeAxis::new(&store, TimeAxisConfig::default());

    let fallback = axis.create_ticks(TickParams::adaptive(Interval::Hours(4)));
    let density = axis.create_ticks(TickParams::density(Interval::Hours(4)));

    assert!(!fallback.is_empty());
    assert_eq!(fallback, density);
}

#[test]
fn unrecognized_interval_yields_nothing_under_empty_policy() {
    let store = hourly_store(72);
    let config =
        TimeAxisConfig::default().with_unrecognized_interval(UnrecognizedIntervalPolicy::Empty);
    let axis = TimeAxis::new(&store, config);

    assert!(axis.create_ticks(TickParams::adaptive(Interval::Hours(4))).is_empty());
    assert!(axis.create_ticks(TickParams::adaptive(Interval::Days(2))).is_empty());
    // Density mode is explicit and unaffected by the policy.
    assert!(!axis.create_ticks(TickParams::density(Interval::Hours(4))).is_empty());
}

#[test]
fn custom_strategy_replaces_builtin_ticks_verbatim() {
    let store = hourly_store(24);
    let strategy: Arc<dyn TimeTickStrategy> = Arc::new(|ctx: &TickContext<'_>| {
        let range = ctx.visible_range();
        (range.from..range.to)
            .step_by(6)
            .map(|index| TimeTick {
                text: format!("#{index}"),
                coord: ctx.data_index_to_pixel(index),
                value: ctx.bars()[index].timestamp,
            })
            .collect()
    });
    let axis = TimeAxis::new(&store, TimeAxisConfig::default()).with_tick_strategy(strategy);

    let ticks = axis.create_ticks(TickParams::adaptive(Interval::Hours(1)));

    let texts: Vec<&str> = ticks.iter().map(|tick| tick.text.as_str()).collect();
    assert_eq!(texts, vec!["#0", "#6", "#12", "#18"]);
    assert_eq!(ticks[2].coord, axis.convert_to_pixel(12));
}

#[test]
fn custom_strategy_sees_the_requested_interval() {
    let store = hourly_store(1);
    let strategy: Arc<dyn TimeTickStrategy> = Arc::new(|ctx: &TickContext<'_>| {
        vec![TimeTick {
            text: ctx.interval().to_string(),
            coord: 0.0,
            value: 0,
        }]
    });
    let axis = TimeAxis::new(&store, TimeAxisConfig::default()).with_tick_strategy(strategy);

    let ticks = axis.create_ticks(TickParams::adaptive(Interval::Minutes(15)));

    // A lone custom tick is not relabeled.
    assert_eq!(ticks[0].text, "15m");
}

#[test]
fn auto_size_defaults_to_axis_band_height() {
    let store = hourly_store(1);
    let axis = TimeAxis::new(&store, TimeAxisConfig::default());

    // axis line 1 + tick line 3 + text margins 4 + 4 + font 12
    approx::assert_relative_eq!(axis.auto_size(), 24.0);
}

#[test]
fn auto_size_grows_to_fit_the_crosshair_label() {
    let store = hourly_store(1);
    let mut crosshair = CrosshairStyle::default();
    crosshair.vertical.text.size = 30.0;
    let axis = TimeAxis::new(&store, TimeAxisConfig::default().with_crosshair(crosshair));

    // padding 2 + 2, border 1 * 2, font 30
    approx::assert_relative_eq!(axis.auto_size(), 36.0);
}

#[test]
fn auto_size_ignores_hidden_parts() {
    let store = hourly_store(1);
    let hidden_axis = TimeAxisStyle {
        show: false,
        ..TimeAxisStyle::default()
    };
    let axis = TimeAxis::new(&store, TimeAxisConfig::default().with_style(hidden_axis.clone()));
    approx::assert_relative_eq!(axis.auto_size(), 18.0);

    let mut hidden_crosshair = CrosshairStyle::default();
    hidden_crosshair.vertical.text.show = false;
    let axis = TimeAxis::new(
        &store,
        TimeAxisConfig::default()
            .with_style(hidden_axis)
            .with_crosshair(hidden_crosshair),
    );
    assert_eq!(axis.auto_size(), 0.0);
}

#[test]
fn fixed_axis_size_is_returned_verbatim() {
    let store = hourly_store(1);
    let style = TimeAxisStyle {
        size: AxisSize::Fixed(40.0),
        ..TimeAxisStyle::default()
    };
    let axis = TimeAxis::new(&store, TimeAxisConfig::default().with_style(style));

    assert_eq!(axis.auto_size(), 40.0);
}

#[test]
fn config_json_fills_omitted_fields_with_defaults() {
    let config = TimeAxisConfig::from_json_str(
        r#"{"unrecognized_interval":"Empty","style":{"tick_line":{"length":6.0}}}"#,
    )
    .expect("parse config");

    assert_eq!(config.unrecognized_interval, UnrecognizedIntervalPolicy::Empty);
    assert_eq!(config.style.tick_line.length, 6.0);
    assert!(config.style.tick_line.show);
    assert_eq!(config.style.tick_text, TimeAxisStyle::default().tick_text);

    let round_trip =
        TimeAxisConfig::from_json_str(&config.to_json_pretty().expect("serialize")).expect("parse");
    assert_eq!(round_trip, config);
}

#[test]
fn config_json_rejects_negative_lengths() {
    let err = TimeAxisConfig::from_json_str(r#"{"style":{"axis_line":{"size":-1.0}}}"#)
        .expect_err("negative size");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err =
        TimeAxisConfig::from_json_str(r#"{"crosshair":{"vertical":{"text":{"size":-12.0}}}}"#)
            .expect_err("negative crosshair label size");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = TimeAxisConfig::from_json_str(
        r#"{"crosshair":{"vertical":{"text":{"border_size":-1.0}}}}"#,
    )
    .expect_err("negative crosshair border");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = TimeAxisConfig::from_json_str("{not json").expect_err("bad json");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn tick_snapshot_round_trips_through_the_json_contract() {
    let store = hourly_store(72);
    let axis = TimeAxis::new(&store, TimeAxisConfig::default());
    let snapshot = axis.tick_snapshot(TickParams::adaptive(Interval::Hours(1)));
    assert_eq!(snapshot.interval, "1h");

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));
    let parsed = TimeTickSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);

    let bad_version = json.replace("\"schema_version\": 1", "\"schema_version\": 7");
    assert!(TimeTickSnapshot::from_json_compat_str(&bad_version).is_err());
}

#[test]
fn tick_snapshot_rejects_ticks_out_of_coordinate_order() {
    let store = hourly_store(72);
    let axis = TimeAxis::new(&store, TimeAxisConfig::default());
    let mut snapshot = axis.tick_snapshot(TickParams::adaptive(Interval::Hours(1)));
    assert!(snapshot.ticks.len() >= 2);
    snapshot.ticks.swap(0, 1);

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let err = TimeTickSnapshot::from_json_compat_str(&json).expect_err("unordered ticks");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let bare = serde_json::to_string(&snapshot).expect("serialize bare");
    assert!(TimeTickSnapshot::from_json_compat_str(&bare).is_err());
}
