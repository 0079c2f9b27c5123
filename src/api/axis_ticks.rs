/// Reference label whose width bounds how close two density ticks may be.
pub(super) const DENSITY_REFERENCE_LABEL: &str = "00-00 00:00";

/// Stride that keeps labels of `reference_width_px` apart when neighbouring
/// candidates are `gap_px` apart.
pub(super) fn density_stride(gap_px: f64, reference_width_px: f64) -> usize {
    if !gap_px.is_finite() || gap_px <= 0.0 {
        return 1;
    }
    if !reference_width_px.is_finite() || gap_px >= reference_width_px {
        return 1;
    }

    (reference_width_px / gap_px).ceil().max(1.0) as usize
}

/// Keeps items `0, stride, 2 * stride, ...`.
pub(super) fn select_every_nth<T: Copy>(items: &[T], stride: usize) -> Vec<T> {
    items.iter().copied().step_by(stride.max(1)).collect()
}
