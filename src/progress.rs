//! Clamped progress ratio shared by every scroll-driven effect.

/// Map `sample` onto the span `start..end` and clamp to `[0, 1]`.
///
/// Descending spans (`start > end`) are fine and count progress downwards,
/// which is how the stack effect measures a card rising towards the top of
/// the viewport. A zero-length or non-finite span yields `0`, as does a NaN
/// sample.
pub fn progress(start: f64, end: f64, sample: f64) -> f64 {
    let span = end - start;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    let ratio = (sample - start) / span;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Move `current` a fraction `ease` of the way towards `target`.
pub fn lerp(current: f64, target: f64, ease: f64) -> f64 {
    current + (target - current) * ease
}
