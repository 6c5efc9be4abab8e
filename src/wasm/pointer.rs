//! Pointer effects: custom cursor, magnetic buttons, hover state and the
//! before/after slider.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement, MouseEvent};

use super::dom::{self, Viewport};
use super::frame::Frames;
use crate::capability::Capability;
use crate::chrome::slider_position;
use crate::config::MotionConfig;
use crate::effects::pointer::{magnetic_css, magnetic_offset, CursorFollower, MAGNETIC_REST_CSS};
use crate::scheduler::TaskId;

pub fn install(
    document: &Document,
    config: &MotionConfig,
    frames: &Frames,
    viewport: &Viewport,
) -> Result<(), JsValue> {
    let cursor = Cursor::new(document, config, frames);
    let magnetic = Magnetic::new(document, config);
    let apply = move |capability: &Capability| {
        if let Err(err) = cursor.apply(capability) {
            warn!("custom cursor update failed: {err:?}");
        }
        if let Err(err) = magnetic.apply(capability) {
            warn!("magnetic buttons update failed: {err:?}");
        }
    };
    apply(&viewport.capability());
    dom::on_debounced_resize(config.resize_debounce_ms, *viewport, apply)?;

    install_hover_state(document)?;
    install_slider(document)?;
    Ok(())
}

/// Existing element for `class`, or a new one appended to the body.
fn cursor_part(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    if let Some(el) = dom::query(document, &format!(".{class}")) {
        return Ok(el);
    }
    let el: HtmlElement = document.create_element("div")?.dyn_into()?;
    el.set_class_name(class);
    dom::body(document)?.append_child(&el)?;
    Ok(el)
}

struct CursorParts {
    dot: HtmlElement,
    outline: HtmlElement,
    follower: Rc<RefCell<CursorFollower>>,
}

/// The dot and eased outline. Built the first time a fine pointer shows up,
/// hidden with its frame task cancelled while there is none.
struct Cursor {
    document: Document,
    ease: f64,
    frames: Frames,
    parts: RefCell<Option<CursorParts>>,
    task: Cell<Option<TaskId>>,
    enabled: Rc<Cell<bool>>,
}

impl Cursor {
    fn new(document: &Document, config: &MotionConfig, frames: &Frames) -> Self {
        Self {
            document: document.clone(),
            ease: config.cursor_ease,
            frames: frames.clone(),
            parts: RefCell::new(None),
            task: Cell::new(None),
            enabled: Rc::new(Cell::new(false)),
        }
    }

    fn apply(&self, capability: &Capability) -> Result<(), JsValue> {
        let wanted = capability.cursor_enabled();
        if wanted == self.enabled.get() {
            return Ok(());
        }
        if wanted && self.parts.borrow().is_none() {
            let parts = self.build()?;
            *self.parts.borrow_mut() = Some(parts);
        }
        self.enabled.set(wanted);

        let parts = self.parts.borrow();
        let Some(parts) = parts.as_ref() else {
            debug!("custom cursor skipped: no fine pointer");
            return Ok(());
        };
        if wanted {
            dom::set_style(&parts.dot, "display", "")?;
            dom::set_style(&parts.outline, "display", "")?;
            let outline = parts.outline.clone();
            let follower = parts.follower.clone();
            let id = self.frames.register(move |_| {
                let css = follower.borrow_mut().step();
                let _ = dom::set_style(&outline, "transform", &css);
            });
            self.task.set(Some(id));
        } else {
            if let Some(id) = self.task.take() {
                self.frames.cancel(id);
            }
            dom::set_style(&parts.dot, "display", "none")?;
            dom::set_style(&parts.outline, "display", "none")?;
        }
        Ok(())
    }

    fn build(&self) -> Result<CursorParts, JsValue> {
        let dot = cursor_part(&self.document, "cursor-dot")?;
        let outline = cursor_part(&self.document, "cursor-outline")?;
        let follower = Rc::new(RefCell::new(CursorFollower::new(self.ease)));

        let target = dot.clone();
        let moved = follower.clone();
        let enabled = self.enabled.clone();
        dom::listen(&dom::window()?, "mousemove", move |e: MouseEvent| {
            if !enabled.get() {
                return;
            }
            let css = moved
                .borrow_mut()
                .pointer_moved(e.client_x() as f64, e.client_y() as f64);
            let _ = dom::set_style(&target, "transform", &css);
        })?;

        Ok(CursorParts {
            dot,
            outline,
            follower,
        })
    }
}

/// Buttons that lean toward the pointer. Listeners are attached once the
/// pointer can hover and go quiet whenever it cannot.
struct Magnetic {
    buttons: Vec<HtmlElement>,
    strength: f64,
    attached: Cell<bool>,
    enabled: Rc<Cell<bool>>,
}

impl Magnetic {
    fn new(document: &Document, config: &MotionConfig) -> Self {
        Self {
            buttons: dom::query_all(document, ".apple-button"),
            strength: config.magnetic_strength,
            attached: Cell::new(false),
            enabled: Rc::new(Cell::new(false)),
        }
    }

    fn apply(&self, capability: &Capability) -> Result<(), JsValue> {
        let wanted = capability.magnetic_enabled();
        self.enabled.set(wanted);
        if !wanted {
            for button in &self.buttons {
                dom::set_style(button, "transform", MAGNETIC_REST_CSS)?;
            }
            return Ok(());
        }
        if !self.attached.replace(true) {
            for button in &self.buttons {
                self.attach(button)?;
            }
        }
        Ok(())
    }

    fn attach(&self, button: &HtmlElement) -> Result<(), JsValue> {
        let strength = self.strength;
        {
            let target = button.clone();
            let enabled = self.enabled.clone();
            dom::listen(button, "mousemove", move |e: MouseEvent| {
                if !enabled.get() {
                    return;
                }
                let rect = target.get_bounding_client_rect();
                let offset = magnetic_offset(
                    (e.client_x() as f64, e.client_y() as f64),
                    (rect.left(), rect.top(), rect.width(), rect.height()),
                    strength,
                );
                let _ = dom::set_style(&target, "transform", &magnetic_css(offset));
            })?;
        }
        let target = button.clone();
        dom::listen(button, "mouseleave", move |_: web_sys::Event| {
            let _ = dom::set_style(&target, "transform", MAGNETIC_REST_CSS);
        })
    }
}

fn install_hover_state(document: &Document) -> Result<(), JsValue> {
    if dom::query(document, ".cursor-outline").is_none() {
        return Ok(());
    }
    let body = dom::body(document)?;
    for target in dom::query_all(document, ".work-item, .card-visual, .reel-visual, a, button") {
        let enter = body.clone();
        dom::listen(&target, "mouseenter", move |_: web_sys::Event| {
            let _ = enter.class_list().add_1("hovering");
        })?;
        let leave = body.clone();
        dom::listen(&target, "mouseleave", move |_: web_sys::Event| {
            let _ = leave.class_list().remove_1("hovering");
        })?;
    }
    Ok(())
}

fn install_slider(document: &Document) -> Result<(), JsValue> {
    let (Some(range), Some(before), Some(line)) = (
        dom::query(document, ".comparison-range"),
        dom::query(document, ".comp-img.before"),
        dom::query(document, ".slider-line"),
    ) else {
        return Ok(());
    };
    let Ok(range) = range.dyn_into::<HtmlInputElement>() else {
        return Ok(());
    };

    let input = range.clone();
    dom::listen(&range, "input", move |_: web_sys::Event| {
        let value = input.value().parse::<f64>().unwrap_or(0.0);
        let pos = slider_position(value);
        let _ = dom::set_style(&before, "clip-path", &pos.clip_path);
        let _ = dom::set_style(&line, "left", &pos.line_left);
    })
}
