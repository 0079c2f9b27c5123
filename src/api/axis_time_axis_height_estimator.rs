use super::{AxisSize, CrosshairStyle, TimeAxisStyle};

/// Height of the time-axis band, never smaller than the crosshair's vertical
/// readout label so that label is not clipped.
pub(super) fn estimate_required_time_axis_height(
    style: &TimeAxisStyle,
    crosshair: &CrosshairStyle,
) -> f64 {
    if let AxisSize::Fixed(height) = style.size {
        return height;
    }

    let mut axis_height = 0.0;
    if style.show {
        if style.axis_line.show {
            axis_height += style.axis_line.size;
        }
        if style.tick_line.show {
            axis_height += style.tick_line.length;
        }
        if style.tick_text.show {
            let text = &style.tick_text;
            axis_height += text.margin_start + text.margin_end + text.font.size;
        }
    }

    let label = crosshair.vertical.text;
    let crosshair_label_height = if crosshair.show && crosshair.vertical.show && label.show {
        label.padding_top + label.padding_bottom + label.border_size * 2.0 + label.size
    } else {
        0.0
    };

    f64::max(axis_height, crosshair_label_height)
}
