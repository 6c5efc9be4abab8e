//! Interaction layer for the portfolio site: scroll-driven effects, the
//! custom cursor and the site chrome.
//!
//! The engine is plain Rust and builds on any target. The browser adapters
//! in [`wasm`] exist only when targeting wasm32.

pub mod capability;
pub mod chrome;
pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod progress;
pub mod rate;
pub mod scheduler;

pub use capability::{Capability, ViewportClass};
pub use config::MotionConfig;
pub use effects::EffectState;
pub use error::FxError;
pub use progress::progress;
pub use scheduler::{FrameScheduler, TaskId};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::MotionConfig;

    mod chrome;
    mod contact;
    pub mod dom;
    mod frame;
    mod pointer;
    pub mod scroll;

    pub use frame::Frames;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Debug).ok();

        let config = MotionConfig::default();
        config.validate()?;

        let document = dom::document()?;
        install(&document, &config)?;
        log::info!("site effects installed");
        Ok(())
    }

    /// Wire every effect whose elements exist on `document`.
    pub fn install(document: &web_sys::Document, config: &MotionConfig) -> Result<(), JsValue> {
        let frames = Frames::start()?;
        let viewport = dom::Viewport::new(config.breakpoints);

        let chrome = chrome::install(document, config)?;
        pointer::install(document, config, &frames, &viewport)?;
        scroll::install(document, config, &frames, &viewport)?;
        contact::install(document, config, chrome.contact_modal)?;
        Ok(())
    }
}
