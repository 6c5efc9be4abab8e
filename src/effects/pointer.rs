use crate::progress::lerp;

/// Custom cursor: a dot pinned to the pointer and an outline that trails it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    pointer: (f64, f64),
    outline: (f64, f64),
    ease: f64,
}

impl CursorFollower {
    pub fn new(ease: f64) -> Self {
        Self {
            pointer: (0.0, 0.0),
            outline: (0.0, 0.0),
            ease,
        }
    }

    /// Record the pointer and return the dot's transform.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> String {
        self.pointer = (x, y);
        centered_translate(x, y)
    }

    /// Per-frame outline step; returns the outline's transform.
    pub fn step(&mut self) -> String {
        self.outline = (
            lerp(self.outline.0, self.pointer.0, self.ease),
            lerp(self.outline.1, self.pointer.1, self.ease),
        );
        centered_translate(self.outline.0, self.outline.1)
    }

    pub fn outline(&self) -> (f64, f64) {
        self.outline
    }
}

fn centered_translate(x: f64, y: f64) -> String {
    format!("translate({x}px, {y}px) translate(-50%, -50%)")
}

/// Offset a magnetic button by a fraction of the pointer's distance from its
/// centre. `rect` is `(left, top, width, height)`.
pub fn magnetic_offset(pointer: (f64, f64), rect: (f64, f64, f64, f64), strength: f64) -> (f64, f64) {
    let (left, top, width, height) = rect;
    let x = pointer.0 - left - width / 2.0;
    let y = pointer.1 - top - height / 2.0;
    (x * strength, y * strength)
}

pub fn magnetic_css(offset: (f64, f64)) -> String {
    format!("translate({}px, {}px)", offset.0, offset.1)
}

pub const MAGNETIC_REST_CSS: &str = "translate(0px, 0px)";
