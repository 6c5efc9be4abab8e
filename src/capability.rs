//! One snapshot of what the current viewport and pointer can do.
//!
//! The browser adapter rebuilds this after every debounced resize and hands
//! it to the effects, so no effect queries media features on its own.

use crate::config::Breakpoints;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capability {
    pub width: f64,
    pub height: f64,
    /// `(hover: hover)` matched.
    pub hover: bool,
    /// `(pointer: fine)` matched.
    pub fine_pointer: bool,
    pub class: ViewportClass,
    tablet_breakpoint: f64,
}

impl Capability {
    pub fn classify(
        width: f64,
        height: f64,
        hover: bool,
        fine_pointer: bool,
        breakpoints: &Breakpoints,
    ) -> Self {
        let class = if width <= breakpoints.mobile {
            ViewportClass::Mobile
        } else if width <= breakpoints.tablet {
            ViewportClass::Tablet
        } else if width <= breakpoints.desktop {
            ViewportClass::Desktop
        } else {
            ViewportClass::Wide
        };

        Self {
            width,
            height,
            hover,
            fine_pointer,
            class,
            tablet_breakpoint: breakpoints.tablet,
        }
    }

    /// The horizontal reel runs only on wide screens driven by a mouse.
    pub fn reel_enabled(&self) -> bool {
        self.width > self.tablet_breakpoint && self.hover
    }

    pub fn cursor_enabled(&self) -> bool {
        self.fine_pointer
    }

    /// Magnetic buttons only make sense for a pointer that can hover.
    pub fn magnetic_enabled(&self) -> bool {
        self.hover
    }
}
