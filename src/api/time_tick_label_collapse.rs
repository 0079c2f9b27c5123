use super::time_label_format::{TimeLabelPattern, calendar_change_label, format_time_label};
use super::{TimeAxisLabelConfig, TimeTick};

/// Rewrites the first tick's text so the leftmost label carries enough date
/// context on its own.
///
/// - a lone tick gets the full `YYYY-MM-DD HH:mm` stamp;
/// - with three or more ticks the first one adopts the date pattern of the
///   third (`MM-DD`, `YYYY-MM` or `YYYY`) and is left alone otherwise;
/// - with exactly two ticks it names the most significant calendar field that
///   differs from the second tick, keeping its text when both share a day.
pub fn collapse_first_tick_label(ticks: &mut [TimeTick], config: TimeAxisLabelConfig) {
    match ticks {
        [] => {}
        [only] => {
            only.text = format_time_label(only.value, TimeLabelPattern::DateMinute, config);
        }
        [first, second] => {
            if let Some(text) = calendar_change_label(first.value, second.value, config) {
                first.text = text;
            }
        }
        [first, _, third, ..] => {
            if let Some(pattern) = TimeLabelPattern::classify(&third.text) {
                first.text = format_time_label(first.value, pattern, config);
            }
        }
    }
}
