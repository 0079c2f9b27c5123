use super::axis_ticks::{DENSITY_REFERENCE_LABEL, density_stride, select_every_nth};
use super::time_label_format::{TimeLabelPattern, calendar_change_label, format_time_label};
use super::{TextMeasurer, TickContext, TimeTick};

/// Candidate ticks at every visible bar, thinned so that labels as wide as
/// `"00-00 00:00"` do not overlap.
///
/// The stride comes from the gap between the first two candidates. Each kept
/// tick after the first names the calendar field that changed since the
/// previous kept tick, or its `HH:mm` time when the day is unchanged.
#[must_use]
pub fn density_ticks(ctx: &TickContext<'_>, measurer: &dyn TextMeasurer) -> Vec<TimeTick> {
    let range = ctx.visible_range();
    if range.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<(usize, f64)> = (range.from..range.to)
        .map(|index| (index, ctx.data_index_to_pixel(index)))
        .collect();
    let stride = match candidates.as_slice() {
        [(_, first), (_, second), ..] => {
            let reference_width = measurer.measure(DENSITY_REFERENCE_LABEL, ctx.tick_font());
            density_stride((second - first).abs(), reference_width)
        }
        _ => 1,
    };

    let bars = ctx.bars();
    let label = ctx.label_config();
    let mut previous_timestamp: Option<i64> = None;
    select_every_nth(&candidates, stride)
        .into_iter()
        .map(|(index, coord)| {
            let timestamp = bars[index].timestamp;
            let text = previous_timestamp
                .and_then(|previous| calendar_change_label(timestamp, previous, label))
                .unwrap_or_else(|| {
                    format_time_label(timestamp, TimeLabelPattern::HourMinute, label)
                });
            previous_timestamp = Some(timestamp);
            TimeTick {
                text,
                coord,
                value: timestamp,
            }
        })
        .collect()
}
