use crate::config::MotionConfig;
use crate::progress::progress;

/// Zoom-out of the hero media as the page scrolls through the first viewport.
#[derive(Debug, Clone, Copy)]
pub struct HeroParallax {
    base_scale: f64,
    scale_rate: f64,
    drift: f64,
    fade: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub scale: f64,
    pub translate_y: f64,
    pub opacity: f64,
}

impl HeroParallax {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            base_scale: config.hero_base_scale,
            scale_rate: config.hero_scale_rate,
            drift: config.hero_drift,
            fade: config.hero_fade,
        }
    }

    /// `None` once the hero has scrolled out; the last write stays in place.
    pub fn sample(&self, scroll_y: f64, viewport_height: f64) -> Option<HeroTransform> {
        if scroll_y >= viewport_height {
            return None;
        }
        let scroll_y = scroll_y.max(0.0);
        let fade = progress(0.0, viewport_height, scroll_y) * self.fade;
        Some(HeroTransform {
            scale: (self.base_scale - scroll_y * self.scale_rate).max(1.0),
            translate_y: scroll_y * self.drift,
            opacity: (1.0 - fade).clamp(0.0, 1.0),
        })
    }
}

impl HeroTransform {
    pub fn transform_css(&self) -> String {
        format!(
            "scale({}) translate3d(0, {}px, 0)",
            self.scale, self.translate_y
        )
    }

    pub fn opacity_css(&self) -> String {
        self.opacity.to_string()
    }
}
