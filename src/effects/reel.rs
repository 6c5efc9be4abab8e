//! Horizontal reel: vertical scrolling through a tall section slides a wide
//! track sideways, eased and skewed in the direction of travel.
//!
//! The reel only runs on wide, hover-capable screens. Everywhere else the
//! track sits at its natural position and the driver ignores the scroll.

use log::debug;

use super::EffectState;
use crate::capability::Capability;
use crate::config::MotionConfig;
use crate::progress::progress;

/// Layout measurements taken on the section and its track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelGeometry {
    pub section_top: f64,
    pub section_height: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
    pub track_width: f64,
}

impl ReelGeometry {
    /// Furthest the track can slide before its right edge enters view.
    pub fn limit(&self) -> f64 {
        (self.track_width - self.viewport_width).max(0.0)
    }

    pub fn in_view(&self, scroll_y: f64) -> bool {
        scroll_y + self.viewport_height > self.section_top
            && scroll_y < self.section_top + self.section_height
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        let start = self.section_top;
        let end = self.section_top + self.section_height - self.viewport_height;
        progress(start, end, scroll_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelMode {
    Disabled,
    Active,
}

/// Outcome of [`ReelDriver::relayout`], telling the adapter whether to
/// start or stop the frame task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    /// Became active: start the frame task.
    Entered,
    /// Became disabled: reset the track and cancel the frame task.
    Exited,
    /// Still active with a refreshed limit.
    Relaid,
    /// Still disabled.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelFrame {
    pub offset: f64,
    pub skew_deg: f64,
}

impl ReelFrame {
    pub fn css(&self) -> String {
        format!(
            "translate3d({}px, 0, 0) skewX({}deg)",
            -self.offset, self.skew_deg
        )
    }
}

/// Transform that puts the track back where the stylesheet left it.
pub const RESET_CSS: &str = "none";

#[derive(Debug, Clone)]
pub struct ReelDriver {
    state: EffectState,
    mode: ReelMode,
    epsilon: f64,
    max_skew_deg: f64,
    skew_gain: f64,
    // Set once the resting frame has been written, so idle frames skip the DOM.
    rest_written: bool,
}

impl ReelDriver {
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            state: EffectState::new(config.reel_ease),
            mode: ReelMode::Disabled,
            epsilon: config.reel_epsilon,
            max_skew_deg: config.reel_max_skew_deg,
            skew_gain: config.reel_skew_gain,
            rest_written: false,
        }
    }

    pub fn mode(&self) -> ReelMode {
        self.mode
    }

    pub fn state(&self) -> &EffectState {
        &self.state
    }

    pub fn relayout(&mut self, capability: &Capability, limit: f64) -> ModeChange {
        match (self.mode, capability.reel_enabled()) {
            (ReelMode::Active, false) => {
                debug!("reel disabled at width {}", capability.width);
                self.mode = ReelMode::Disabled;
                self.state.reset();
                ModeChange::Exited
            }
            (ReelMode::Disabled, false) => ModeChange::Unchanged,
            (ReelMode::Disabled, true) => {
                debug!("reel enabled at width {}, limit {limit}", capability.width);
                self.mode = ReelMode::Active;
                self.state.reset();
                self.state.set_limit(limit);
                self.rest_written = false;
                ModeChange::Entered
            }
            (ReelMode::Active, true) => {
                self.state.set_limit(limit);
                self.rest_written = false;
                ModeChange::Relaid
            }
        }
    }

    /// Advance one frame. Returns the transform to write, or `None` when the
    /// reel is disabled or already resting where the last write left it.
    pub fn frame(&mut self, scroll_y: f64, geometry: &ReelGeometry) -> Option<ReelFrame> {
        if self.mode == ReelMode::Disabled {
            return None;
        }

        self.state.visible = geometry.in_view(scroll_y);
        if self.state.visible {
            self.state.set_target(self.state.limit * geometry.progress(scroll_y));
        }

        let diff = self.state.step(self.epsilon);
        if diff.abs() <= self.epsilon {
            if self.rest_written {
                return None;
            }
            self.rest_written = true;
            return Some(ReelFrame {
                offset: self.state.current,
                skew_deg: 0.0,
            });
        }

        self.rest_written = false;
        Some(ReelFrame {
            offset: self.state.current,
            skew_deg: (-diff * self.skew_gain).clamp(-self.max_skew_deg, self.max_skew_deg),
        })
    }
}
