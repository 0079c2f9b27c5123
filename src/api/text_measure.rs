use super::TickFont;

/// Measures rendered label width for overlap decisions.
///
/// Hosts with a real text backend plug their own implementation into
/// [`TimeAxis::with_text_measurer`](super::TimeAxis::with_text_measurer).
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font: &TickFont) -> f64;
}

/// Deterministic, backend-independent width estimate from per-glyph advance
/// ratios. Bold weights widen every glyph slightly.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font: &TickFont) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        let weight_factor = if font.weight >= 600 { 1.06 } else { 1.0 };
        (units * font.size * weight_factor).max(font.size)
    }
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &TickFont) -> f64 + Send + Sync,
{
    fn measure(&self, text: &str, font: &TickFont) -> f64 {
        self(text, font)
    }
}
