//! Menu, modals, active-link highlight, local clock and preloader.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlIFrameElement, HtmlImageElement, HtmlMediaElement,
    KeyboardEvent, MouseEvent,
};

use super::dom;
use crate::chrome::clock::format_clock;
use crate::chrome::preloader::LoadTracker;
use crate::chrome::{is_active_link, trap_focus, video_embed_url, Overlay};
use crate::config::MotionConfig;

const FOCUSABLE: &str =
    "a[href], button:not([disabled]), input, textarea, select, [tabindex]:not([tabindex='-1'])";

/// The fullscreen menu and the elements its state is mirrored onto.
pub struct Menu {
    state: Cell<Overlay>,
    trigger: HtmlElement,
    panel: HtmlElement,
    header: Option<HtmlElement>,
    document: Document,
}

impl Menu {
    pub fn set(&self, state: Overlay) {
        self.state.set(state);
        let open = state.is_open();
        let _ = self.panel.class_list().toggle_with_force("active", open);
        let _ = self.trigger.class_list().toggle_with_force("active", open);
        if let Some(header) = &self.header {
            let _ = header.class_list().toggle_with_force("menu-active", open);
        }
        let _ = dom::set_body_overflow(&self.document, state.body_overflow());
    }

    pub fn close(&self) {
        if self.state.get().is_open() {
            self.set(Overlay::Closed);
        }
    }
}

/// A backdrop-style modal toggled with the `active` class.
pub struct Modal {
    state: Cell<Overlay>,
    root: HtmlElement,
    document: Document,
}

impl Modal {
    fn new(root: HtmlElement, document: &Document) -> Self {
        Self {
            state: Cell::new(Overlay::Closed),
            root,
            document: document.clone(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn open(&self) {
        self.state.set(Overlay::Open);
        let _ = self.root.class_list().add_1("active");
        let _ = dom::set_body_overflow(&self.document, Overlay::Open.body_overflow());
        if let Some(first) = dom::query_within(&self.root, FOCUSABLE).first() {
            let _ = first.focus();
        }
    }

    pub fn close(&self) {
        self.state.set(Overlay::Closed);
        let _ = self.root.class_list().remove_1("active");
        let _ = dom::set_body_overflow(&self.document, Overlay::Closed.body_overflow());
    }

    /// Keep Tab focus cycling inside the modal.
    fn trap_tab(&self, event: &KeyboardEvent) {
        let items = dom::query_within(&self.root, FOCUSABLE);
        let active = self.document.active_element();
        let current = active.as_ref().and_then(|el| {
            items
                .iter()
                .position(|item| AsRef::<Element>::as_ref(item) == el)
        });
        if let Some(next) = trap_focus(current, items.len(), event.shift_key()) {
            event.prevent_default();
            let _ = items[next].focus();
        }
    }
}

/// Chrome pieces other adapters need to drive.
#[derive(Default)]
pub struct Chrome {
    pub contact_modal: Option<Rc<Modal>>,
}

pub fn install(document: &Document, config: &MotionConfig) -> Result<Chrome, JsValue> {
    let menu = install_menu(document)?;
    let contact_modal = install_contact_modal(document, menu.clone())?;
    install_video_lightbox(document)?;
    highlight_active_link(document)?;
    install_clock(document, config)?;
    install_preloader(document, config)?;
    Ok(Chrome { contact_modal })
}

fn install_menu(document: &Document) -> Result<Option<Rc<Menu>>, JsValue> {
    let (Some(trigger), Some(panel)) = (
        dom::query(document, ".menu-trigger"),
        dom::query(document, ".fullscreen-menu"),
    ) else {
        debug!("menu inert: missing .menu-trigger or .fullscreen-menu");
        return Ok(None);
    };

    let menu = Rc::new(Menu {
        state: Cell::new(Overlay::Closed),
        trigger: trigger.clone(),
        panel,
        header: dom::query(document, ".floating-header"),
        document: document.clone(),
    });

    {
        let menu = menu.clone();
        dom::listen(&trigger, "click", move |_: web_sys::Event| {
            menu.set(menu.state.get().toggled());
        })?;
    }
    for link in dom::query_all(document, ".menu-link") {
        let menu = menu.clone();
        dom::listen(&link, "click", move |_: web_sys::Event| menu.set(Overlay::Closed))?;
    }
    Ok(Some(menu))
}

fn install_contact_modal(
    document: &Document,
    menu: Option<Rc<Menu>>,
) -> Result<Option<Rc<Modal>>, JsValue> {
    let Some(root) = dom::by_id::<HtmlElement>(document, "contact-modal") else {
        return Ok(None);
    };
    let triggers = dom::query_all(document, ".contact-trigger");
    if triggers.is_empty() {
        return Ok(None);
    }

    let modal = Rc::new(Modal::new(root.clone(), document));
    for trigger in triggers {
        let modal = modal.clone();
        let menu = menu.clone();
        dom::listen(&trigger, "click", move |e: web_sys::Event| {
            e.prevent_default();
            if let Some(menu) = &menu {
                menu.close();
            }
            modal.open();
        })?;
    }

    if let Some(close) = dom::query(document, ".modal-close-btn") {
        let modal = modal.clone();
        dom::listen(&close, "click", move |_: web_sys::Event| modal.close())?;
    }
    {
        let modal = modal.clone();
        let backdrop = root.clone();
        dom::listen(&root, "click", move |e: MouseEvent| {
            let on_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                .is_some_and(|t| t == backdrop);
            if on_backdrop {
                modal.close();
            }
        })?;
    }
    {
        let modal = modal.clone();
        dom::listen(document, "keydown", move |e: KeyboardEvent| {
            if !modal.is_open() {
                return;
            }
            match e.key().as_str() {
                "Escape" => modal.close(),
                "Tab" => modal.trap_tab(&e),
                _ => {}
            }
        })?;
    }
    Ok(Some(modal))
}

fn install_video_lightbox(document: &Document) -> Result<(), JsValue> {
    let (Some(lightbox), Some(frame)) = (
        dom::by_id::<HtmlElement>(document, "video-lightbox"),
        dom::by_id::<HtmlIFrameElement>(document, "video-frame"),
    ) else {
        return Ok(());
    };
    let triggers = dom::query_all(document, ".video-trigger");
    if triggers.is_empty() {
        return Ok(());
    }

    let modal = Rc::new(Modal::new(lightbox.clone(), document));
    for trigger in triggers {
        let modal = modal.clone();
        let frame = frame.clone();
        let button = trigger.clone();
        dom::listen(&trigger, "click", move |e: web_sys::Event| {
            e.prevent_default();
            if let Some(id) = button.get_attribute("data-video-id") {
                frame.set_src(&video_embed_url(&id));
                modal.open();
            }
        })?;
    }

    let hide = {
        let modal = modal.clone();
        let frame = frame.clone();
        Rc::new(move || {
            modal.close();
            frame.set_src("");
        })
    };
    if let Some(close) = dom::by_id::<HtmlElement>(document, "close-video") {
        let hide = hide.clone();
        dom::listen(&close, "click", move |_: web_sys::Event| hide())?;
    }
    let backdrop = lightbox.clone();
    dom::listen(&lightbox, "click", move |e: MouseEvent| {
        let on_backdrop = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            .is_some_and(|t| t == backdrop);
        if on_backdrop {
            hide();
        }
    })
}

fn highlight_active_link(document: &Document) -> Result<(), JsValue> {
    let path = dom::window()?.location().pathname()?;
    for link in dom::query_all(document, ".menu-link") {
        let href = link.get_attribute("href").unwrap_or_default();
        if is_active_link(&path, &href) {
            dom::set_style(&link, "color", "var(--accent-gold)")?;
            dom::set_style(&link, "padding-left", "20px")?;
        }
    }
    Ok(())
}

fn install_clock(document: &Document, config: &MotionConfig) -> Result<(), JsValue> {
    let Some(el) = dom::by_id::<HtmlElement>(document, "local-time") else {
        return Ok(());
    };
    let offset = config.clock_offset_minutes;
    let label = config.clock_label.clone();
    let update = move || {
        el.set_text_content(Some(format_clock(js_sys::Date::now(), offset, &label).as_str()));
    };
    update();
    dom::every(1000, update)?;
    Ok(())
}

fn media_settled(el: &HtmlElement) -> bool {
    if let Some(img) = el.dyn_ref::<HtmlImageElement>() {
        img.complete()
    } else if let Some(media) = el.dyn_ref::<HtmlMediaElement>() {
        media.ready_state() >= HtmlMediaElement::HAVE_CURRENT_DATA
    } else {
        true
    }
}

fn install_preloader(document: &Document, config: &MotionConfig) -> Result<(), JsValue> {
    let Some(preloader) = dom::query(document, ".preloader") else {
        return Ok(());
    };
    let bar = dom::query(document, ".bar-fill");
    let media = dom::query_all(document, "img, video");
    let tracker = Rc::new(RefCell::new(LoadTracker::new(media.len())));
    let delay = config.preloader_delay_ms;

    // Runs once per media element; the last one schedules the reveal.
    let settle = {
        let tracker = tracker.clone();
        Rc::new(move |counted: bool| {
            let mut tracker = tracker.borrow_mut();
            if counted {
                tracker.settle_one();
            }
            if let Some(bar) = &bar {
                let _ = dom::set_style(bar, "width", &tracker.bar_width_css());
            }
            if tracker.is_complete() {
                let preloader = preloader.clone();
                let _ = dom::after(delay, move || {
                    let _ = preloader.class_list().add_1("complete");
                    info!("preloader complete");
                });
            }
        })
    };

    if media.is_empty() {
        settle(false);
        return Ok(());
    }
    for el in media {
        if media_settled(&el) {
            settle(true);
            continue;
        }
        let event = if el.dyn_ref::<HtmlImageElement>().is_some() {
            "load"
        } else {
            "loadeddata"
        };
        // Whichever of load/error fires first counts; the other is ignored.
        let done = Rc::new(Cell::new(false));
        for name in [event, "error"] {
            let done = done.clone();
            let settle = settle.clone();
            dom::listen(&el, name, move |_: web_sys::Event| {
                if !done.replace(true) {
                    settle(true);
                }
            })?;
        }
    }
    Ok(())
}
