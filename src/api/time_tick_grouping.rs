use chrono::{DateTime, Datelike, FixedOffset};

use crate::core::{BarRecord, TickGrouping};

use super::time_label_format::{local_datetime, month_abbreviation};
use super::{AxisLabelLocale, TickContext, TimeTick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GroupMark {
    key: (i32, u32, u32),
    year: i32,
    month: u32,
}

impl GroupMark {
    fn of(grouping: TickGrouping, bar: &BarRecord, local: &DateTime<FixedOffset>) -> Self {
        let (year, month) = (local.year(), local.month());
        let key = match grouping {
            TickGrouping::Day => (year, month, local.day()),
            TickGrouping::Week => {
                let iso = local.iso_week();
                (iso.year(), bar.week.unwrap_or_else(|| iso.week()), 0)
            }
            TickGrouping::Month => (year, month, 0),
            TickGrouping::Year => (year, 0, 0),
        };
        Self { key, year, month }
    }
}

fn group_label(
    grouping: TickGrouping,
    local: &DateTime<FixedOffset>,
    previous: Option<GroupMark>,
    locale: AxisLabelLocale,
) -> String {
    let same_month = previous
        .is_some_and(|mark| mark.year == local.year() && mark.month == local.month());
    let same_year = previous.is_some_and(|mark| mark.year == local.year());
    let month = month_abbreviation(local.month(), locale);

    match grouping {
        TickGrouping::Day if same_month => local.day().to_string(),
        TickGrouping::Day => format!("{month} {}", local.day()),
        TickGrouping::Week if same_month => local.day().to_string(),
        TickGrouping::Week => format!("{} {month}", local.day()),
        TickGrouping::Month if same_year => month.to_owned(),
        TickGrouping::Month | TickGrouping::Year => local.format("%Y").to_string(),
    }
}

/// Emits one tick at the first visible bar of every calendar group.
///
/// The first visible bar always opens a group. Day ticks sit half a bar to
/// the left of the bar center, on the boundary with the previous day.
#[must_use]
pub fn group_ticks(ctx: &TickContext<'_>, grouping: TickGrouping) -> Vec<TimeTick> {
    let range = ctx.visible_range();
    let bars = ctx.bars();
    if range.is_empty() {
        return Vec::new();
    }

    let label = ctx.label_config();
    let coord_shift = match grouping {
        TickGrouping::Day => ctx.bar_space().half_bar,
        TickGrouping::Week | TickGrouping::Month | TickGrouping::Year => 0.0,
    };

    let mut ticks = Vec::new();
    let mut previous: Option<GroupMark> = None;
    for (index, bar) in bars.iter().enumerate().take(range.to).skip(range.from) {
        let Some(local) = local_datetime(bar.timestamp, label) else {
            continue;
        };
        let mark = GroupMark::of(grouping, bar, &local);
        if previous.is_some_and(|last| last.key == mark.key) {
            continue;
        }

        ticks.push(TimeTick {
            text: group_label(grouping, &local, previous, label.locale),
            coord: ctx.data_index_to_pixel(index) - coord_shift,
            value: bar.timestamp,
        });
        previous = Some(mark);
    }

    ticks
}
