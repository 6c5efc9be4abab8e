//! Scroll- and pointer-driven transforms. Everything here is pure: an
//! effect turns a sample into numbers and CSS strings, and the browser
//! adapter writes them.

pub mod hero;
pub mod image;
pub mod pointer;
pub mod reel;
pub mod stack;

/// Animation state for one scroll-driven effect.
///
/// `current` and `target` always lie in `[0, limit]`.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectState {
    pub current: f64,
    pub target: f64,
    pub limit: f64,
    pub ease_factor: f64,
    pub visible: bool,
}

impl EffectState {
    /// An `ease_factor` outside `(0, 1]` falls back to `1`, which snaps
    /// straight to the target.
    pub fn new(ease_factor: f64) -> Self {
        let ease_factor = if ease_factor > 0.0 && ease_factor <= 1.0 {
            ease_factor
        } else {
            1.0
        };
        Self {
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            ease_factor,
            visible: false,
        }
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = if limit.is_finite() { limit.max(0.0) } else { 0.0 };
        self.target = self.clamp(self.target);
        self.current = self.clamp(self.current);
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = self.clamp(target);
    }

    /// Ease `current` towards `target` unless they are within `epsilon`.
    /// Returns the pre-step difference.
    pub fn step(&mut self, epsilon: f64) -> f64 {
        let diff = self.target - self.current;
        if diff.abs() > epsilon {
            self.current = self.clamp(crate::progress::lerp(
                self.current,
                self.target,
                self.ease_factor,
            ));
        }
        diff
    }

    pub fn reset(&mut self) {
        self.current = 0.0;
        self.target = 0.0;
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.limit)
        }
    }
}
