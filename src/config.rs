//! Tunables for every effect on the site, with the production values as
//! defaults.

use crate::error::FxError;

/// Viewport width breakpoints in CSS pixels. A width equal to a breakpoint
/// belongs to the narrower class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub mobile: f64,
    pub tablet: f64,
    pub desktop: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 768.0,
            tablet: 1024.0,
            desktop: 1440.0,
        }
    }
}

/// Identifies the contact-form template on the email relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: "service_jwzflrh".into(),
            template_id: "template_fkw01bj".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    pub breakpoints: Breakpoints,
    pub relay: RelayConfig,

    /// Minimum spacing between scroll/pointer handler runs.
    pub scroll_throttle_ms: f64,
    /// Quiet period before a resize burst is acted on.
    pub resize_debounce_ms: f64,
    /// Delay between the last media load and hiding the preloader.
    pub preloader_delay_ms: i32,

    pub hero_base_scale: f64,
    pub hero_scale_rate: f64,
    /// Downward drift per scrolled pixel; zero keeps the hero pinned.
    pub hero_drift: f64,
    /// Opacity lost over one viewport of scrolling; zero disables the fade.
    pub hero_fade: f64,

    /// Distance from the viewport top where a stack card counts as pinned.
    pub stack_pin_offset: f64,
    pub stack_root_margin: String,

    pub reel_ease: f64,
    pub reel_epsilon: f64,
    pub reel_max_skew_deg: f64,
    pub reel_skew_gain: f64,

    pub image_parallax_speed: f64,
    pub image_zoom: f64,

    pub cursor_ease: f64,
    pub magnetic_strength: f64,

    pub reveal_threshold: f64,

    pub clock_offset_minutes: i32,
    pub clock_label: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            relay: RelayConfig::default(),
            scroll_throttle_ms: 16.0,
            resize_debounce_ms: 150.0,
            preloader_delay_ms: 500,
            hero_base_scale: 1.1,
            hero_scale_rate: 0.0005,
            hero_drift: 0.0,
            hero_fade: 0.0,
            stack_pin_offset: 60.0,
            stack_root_margin: "200px 0px".into(),
            reel_ease: 0.08,
            reel_epsilon: 0.1,
            reel_max_skew_deg: 7.0,
            reel_skew_gain: 0.05,
            image_parallax_speed: 0.15,
            image_zoom: 1.1,
            cursor_ease: 0.15,
            magnetic_strength: 0.2,
            reveal_threshold: 0.1,
            clock_offset_minutes: 330,
            clock_label: "IST".into(),
        }
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), FxError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(FxError::config(field, format!("{value} is outside (0, 1]")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), FxError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FxError::config(field, format!("{value} must be a finite value >= 0")))
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<(), FxError> {
        unit_interval("reel_ease", self.reel_ease)?;
        unit_interval("cursor_ease", self.cursor_ease)?;
        non_negative("reel_epsilon", self.reel_epsilon)?;
        non_negative("reel_max_skew_deg", self.reel_max_skew_deg)?;
        non_negative("scroll_throttle_ms", self.scroll_throttle_ms)?;
        non_negative("resize_debounce_ms", self.resize_debounce_ms)?;
        non_negative("hero_fade", self.hero_fade)?;
        if self.preloader_delay_ms < 0 {
            return Err(FxError::config("preloader_delay_ms", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FxError::config("reveal_threshold", "must lie in [0, 1]"));
        }

        let bp = &self.breakpoints;
        if !(bp.mobile > 0.0 && bp.mobile < bp.tablet && bp.tablet < bp.desktop) {
            return Err(FxError::config(
                "breakpoints",
                format!("{} < {} < {} does not hold", bp.mobile, bp.tablet, bp.desktop),
            ));
        }
        Ok(())
    }
}
