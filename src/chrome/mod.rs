//! State behind the site chrome: menu, modals, preloader, clock and the
//! small pointer-driven widgets. Each state value is owned by the adapter
//! that installs it.

pub mod clock;
pub mod preloader;

/// Whether an observed element currently intersects its observer's region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFlag {
    InView,
    #[default]
    OutOfView,
}

impl ViewFlag {
    pub fn from_intersecting(intersecting: bool) -> Self {
        if intersecting {
            Self::InView
        } else {
            Self::OutOfView
        }
    }

    pub fn is_in_view(self) -> bool {
        self == Self::InView
    }
}

/// Open/closed state shared by the fullscreen menu and both modals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    Open,
    #[default]
    Closed,
}

impl Overlay {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Body `overflow` while this overlay is in this state.
    pub fn body_overflow(self) -> &'static str {
        match self {
            Self::Open => "hidden",
            Self::Closed => "",
        }
    }
}

pub fn video_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?autoplay=1&rel=0")
}

/// Index to focus after Tab (or Shift+Tab) inside a trapped container of
/// `count` focusable elements. `current` is the focused index, if any.
pub fn trap_focus(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    Some(match (current, backwards) {
        (None, false) => 0,
        (None, true) => last,
        (Some(i), false) if i >= last => 0,
        (Some(i), false) => i + 1,
        (Some(0), true) => last,
        (Some(i), true) => (i - 1).min(last),
    })
}

/// Whether a menu link points at the page being viewed.
pub fn is_active_link(current_path: &str, href: &str) -> bool {
    if href.is_empty() {
        return false;
    }
    current_path.ends_with(href) || (current_path == "/" && href == "index.html")
}

/// Clip and handle position for the before/after comparison slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPosition {
    pub clip_path: String,
    pub line_left: String,
}

pub fn slider_position(value: f64) -> SliderPosition {
    let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
    SliderPosition {
        clip_path: format!("inset(0 {}% 0 0)", 100.0 - value),
        line_left: format!("{value}%"),
    }
}
