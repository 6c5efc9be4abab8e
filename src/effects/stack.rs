use crate::progress::progress;

/// How far the card after this one has risen towards its pinned position.
pub fn stack_progress(viewport_height: f64, pin_offset: f64, next_card_top: f64) -> f64 {
    progress(viewport_height, pin_offset, next_card_top)
}

/// A card recedes (shrinks, darkens, fades) as the next one covers it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackTransform {
    pub scale: f64,
    pub brightness: f64,
    pub opacity: f64,
}

impl StackTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        brightness: 1.0,
        opacity: 1.0,
    };

    pub fn from_progress(progress: f64) -> Self {
        if progress <= 0.0 {
            return Self::IDENTITY;
        }
        Self {
            scale: 1.0 - progress * 0.1,
            brightness: 1.0 - progress * 0.6,
            opacity: 1.0 - progress * 0.5,
        }
    }

    pub fn transform_css(&self) -> String {
        format!("scale({})", self.scale)
    }

    pub fn filter_css(&self) -> String {
        format!("brightness({})", self.brightness)
    }

    pub fn opacity_css(&self) -> String {
        self.opacity.to_string()
    }
}
